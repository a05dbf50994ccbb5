//! Local table of contents for the directory enclosing a page.
//!
//! Output is a nested Markdown list: pages first, then one item per child
//! directory followed by that directory's own block, indented four spaces
//! deeper.

use std::fmt::Write;

use crate::tree::{LookupStrategy, PageTree};

/// Spaces added per nesting level.
const INDENT_UNIT: usize = 4;

/// Render the table of contents for the subtree enclosing
/// `current_page_path`.
///
/// Returns an empty string when the page does not resolve to a node.
#[must_use]
pub fn render_toc(root: &PageTree, current_page_path: &str) -> String {
    render_toc_with(root, current_page_path, LookupStrategy::default())
}

/// Render the table of contents using an explicit lookup strategy.
#[must_use]
pub fn render_toc_with(
    root: &PageTree,
    current_page_path: &str,
    lookup: LookupStrategy,
) -> String {
    let Some(subtree) = root.subtree_at_with(current_page_path, lookup) else {
        tracing::debug!(
            path = current_page_path,
            "No directory for page, skipping table of contents"
        );
        return String::new();
    };

    let mut toc = String::new();
    render_level(&mut toc, subtree, 0);
    toc
}

fn render_level(toc: &mut String, node: &PageTree, indent: usize) {
    let pad = " ".repeat(indent);
    for page in node.pages() {
        let _ = writeln!(toc, "{pad}- [{}]({})", page.display_title(), page.path);
    }
    for child in node.children() {
        let _ = writeln!(
            toc,
            "{pad}- [{}]({}):",
            child.display_title(),
            child.directory_path()
        );
        render_level(toc, child, indent + INDENT_UNIT);
    }
}

//! Per-render navigation entry points.
//!
//! Every call builds its own [`PageTree`] from the immutable [`SitePages`]
//! snapshot, so concurrent renders share nothing mutable.

use sitenav_tree::{PageTree, SidebarOptions, render_sidebar_with, render_toc_with};

use crate::error::SiteError;
use crate::pages::{SiteOptions, SitePages};

/// Navigation renderer for one site snapshot.
#[derive(Clone, Debug)]
pub struct SiteNav {
    pages: SitePages,
    options: SiteOptions,
}

impl SiteNav {
    /// Create a renderer over a page snapshot.
    #[must_use]
    pub fn new(pages: SitePages, options: SiteOptions) -> Self {
        Self { pages, options }
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Build a fresh page tree.
    ///
    /// # Errors
    ///
    /// Fails on the first page whose path cannot be placed in the tree, or on
    /// a duplicate path under [`DuplicatePolicy::Reject`](sitenav_tree::DuplicatePolicy::Reject).
    pub fn tree(&self) -> Result<PageTree, SiteError> {
        let tree = PageTree::build(
            self.pages.entries(),
            self.pages.titles(),
            self.options.duplicates,
        )?;
        Ok(tree)
    }

    /// Render the sidebar with `current_page_path` marked.
    ///
    /// # Errors
    ///
    /// Fails when the page tree cannot be built.
    pub fn sidebar(&self, current_page_path: &str) -> Result<String, SiteError> {
        let tree = self.tree()?;
        let options = SidebarOptions {
            escape_html: self.options.escape_html,
        };
        Ok(render_sidebar_with(&tree, current_page_path, options))
    }

    /// Render the table of contents for the directory of `current_page_path`.
    ///
    /// An unresolvable page yields an empty string.
    ///
    /// # Errors
    ///
    /// Fails when the page tree cannot be built.
    pub fn toc(&self, current_page_path: &str) -> Result<String, SiteError> {
        let tree = self.tree()?;
        Ok(render_toc_with(&tree, current_page_path, self.options.lookup))
    }
}

//! Full-site navigation sidebar.
//!
//! Produces the markup expected by the theme's sidebar styles:
//!
//! - root pages go in a top-level `<ul>`
//! - first-level directories render as a bare caption link followed by a
//!   `<ul>` of their pages and nested directories
//! - deeper directories render as an `<li>` wrapping their link and their
//!   own `<ul>`
//!
//! Pages in a directory at depth `d` carry `level-{d + 1}`; a nested
//! directory item at depth `d` carries `level-{d}`.

use std::fmt::Write;

use crate::entry::WebPage;
use crate::html::maybe_escape;
use crate::tree::PageTree;

const CAPTION_CLASS: &str = "caption d-block text-uppercase no-wrap px-2 py-0";
const LINK_CLASS: &str = "d-flex flex-items-baseline";

/// Sidebar rendering options.
#[derive(Clone, Copy, Debug, Default)]
pub struct SidebarOptions {
    /// HTML-escape titles and paths. Off by default: the host is expected
    /// to hand over trusted text.
    pub escape_html: bool,
}

/// Render the full navigation sidebar, marking the page at
/// `current_page_path` as current.
#[must_use]
pub fn render_sidebar(root: &PageTree, current_page_path: &str) -> String {
    render_sidebar_with(root, current_page_path, SidebarOptions::default())
}

/// Render the full navigation sidebar with explicit options.
#[must_use]
pub fn render_sidebar_with(
    root: &PageTree,
    current_page_path: &str,
    options: SidebarOptions,
) -> String {
    let sidebar = Sidebar {
        current_page_path,
        escape: options.escape_html,
    };

    let mut html = String::with_capacity(256 * (root.page_count() + 1));
    html.push_str("<ul>");
    sidebar.pages(&mut html, root);
    html.push_str("</ul>");
    for child in root.children() {
        sidebar.directory(&mut html, child);
    }
    html
}

struct Sidebar<'a> {
    current_page_path: &'a str,
    escape: bool,
}

impl Sidebar<'_> {
    fn directory(&self, html: &mut String, node: &PageTree) {
        let href = maybe_escape(node.directory_path(), self.escape);
        let title = maybe_escape(node.display_title(), self.escape);

        if node.depth() == 1 {
            let _ = write!(html, r#"<a class="{CAPTION_CLASS}" href="{href}">{title}</a>"#);
            html.push_str("<ul>");
            self.contents(html, node);
            html.push_str("</ul>");
        } else {
            let _ = write!(
                html,
                r#"<li class="toc level-{}"><a class="{LINK_CLASS}" href="{href}">{title}</a>"#,
                node.depth()
            );
            html.push_str("<ul>");
            self.contents(html, node);
            html.push_str("</ul></li>");
        }
    }

    fn contents(&self, html: &mut String, node: &PageTree) {
        self.pages(html, node);
        for child in node.children() {
            self.directory(html, child);
        }
    }

    fn pages(&self, html: &mut String, node: &PageTree) {
        let level = node.depth() + 1;
        for page in node.pages() {
            self.page(html, page, level);
        }
    }

    fn page(&self, html: &mut String, page: &WebPage, level: usize) {
        let is_current = page.path == self.current_page_path;
        let current_class = if is_current { " current" } else { "" };
        let aria = if is_current {
            r#" aria-current="page""#
        } else {
            ""
        };

        let _ = write!(html, r#"<li class="toc level-{level}{current_class}""#);
        if let Some(sort_key) = page.sort_key {
            let _ = write!(html, r#" data-sort="{sort_key}""#);
        }
        let _ = write!(
            html,
            r#" data-level="{level}"><a class="{LINK_CLASS}" href="{}"{aria}>{}</a></li>"#,
            maybe_escape(&page.path, self.escape),
            maybe_escape(page.display_title(), self.escape),
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entry::PathEntry;
    use crate::titles::DirectoryTitleIndex;
    use crate::tree::DuplicatePolicy;

    fn build(entries: &[PathEntry], titles: &DirectoryTitleIndex) -> PageTree {
        PageTree::build(entries, titles, DuplicatePolicy::Replace).unwrap()
    }

    fn sample_entries() -> Vec<PathEntry> {
        [
            ("/rootfile.html", "Root File"),
            ("/foo/foo.html", "Foo"),
            ("/bar/bar.html", "Bar"),
            ("/a/b/c/d2.html", "D2"),
            ("/a/b/c/d1.html", "D1"),
            ("/a/aa/aaa/aaaa.html", "AAAA"),
            ("/a/aa.html", "AA"),
        ]
        .into_iter()
        .map(|(path, title)| PathEntry::new(path).with_title(title))
        .collect()
    }

    #[test]
    fn test_render_root_pages_only() {
        let root = build(
            &[PathEntry::new("/about.html").with_title("About")],
            &DirectoryTitleIndex::new(),
        );

        let html = render_sidebar(&root, "/other.html");

        assert_eq!(
            html,
            r#"<ul><li class="toc level-1" data-level="1"><a class="d-flex flex-items-baseline" href="/about.html">About</a></li></ul>"#
        );
    }

    #[test]
    fn test_render_first_level_directory_as_caption() {
        let titles: DirectoryTitleIndex = [("/guide/", Some("Guide"))].into_iter().collect();
        let root = build(
            &[PathEntry::new("/guide/start.html")
                .with_title("Start")
                .with_sort_key(1.0)],
            &titles,
        );

        let html = render_sidebar(&root, "");

        assert_eq!(
            html,
            concat!(
                "<ul></ul>",
                r#"<a class="caption d-block text-uppercase no-wrap px-2 py-0" href="/guide/">Guide</a>"#,
                "<ul>",
                r#"<li class="toc level-2" data-sort="1" data-level="2"><a class="d-flex flex-items-baseline" href="/guide/start.html">Start</a></li>"#,
                "</ul>",
            )
        );
    }

    #[test]
    fn test_render_deeper_directory_wrapped_in_list_item() {
        let root = build(
            &[PathEntry::new("/guide/setup/install.html").with_title("Install")],
            &DirectoryTitleIndex::new(),
        );

        let html = render_sidebar(&root, "");

        assert_eq!(
            html,
            concat!(
                "<ul></ul>",
                r#"<a class="caption d-block text-uppercase no-wrap px-2 py-0" href="/guide/">guide</a>"#,
                "<ul>",
                r#"<li class="toc level-2"><a class="d-flex flex-items-baseline" href="/guide/setup/">setup</a>"#,
                "<ul>",
                r#"<li class="toc level-3" data-level="3"><a class="d-flex flex-items-baseline" href="/guide/setup/install.html">Install</a></li>"#,
                "</ul></li>",
                "</ul>",
            )
        );
    }

    #[test]
    fn test_render_orders_by_sort_key_then_file_name() {
        let root = build(
            &[
                PathEntry::new("/d/none.html"),
                PathEntry::new("/d/five.html").with_sort_key(5.0),
                PathEntry::new("/d/two.html").with_sort_key(2.0),
            ],
            &DirectoryTitleIndex::new(),
        );

        let html = render_sidebar(&root, "");

        let two = html.find("two.html").unwrap();
        let five = html.find("five.html").unwrap();
        let none = html.find("none.html").unwrap();
        assert!(two < five && five < none, "{html}");
    }

    #[test]
    fn test_render_unkeyed_pages_lexically() {
        let root = build(
            &[PathEntry::new("/z.html"), PathEntry::new("/b.html")],
            &DirectoryTitleIndex::new(),
        );

        let html = render_sidebar(&root, "");

        assert!(html.find("b.html").unwrap() < html.find("z.html").unwrap());
    }

    #[test]
    fn test_render_marks_exactly_one_current_page() {
        let titles: DirectoryTitleIndex = [("/foo/", Some("Foo Dir"))].into_iter().collect();
        let root = build(&sample_entries(), &titles);

        let html = render_sidebar(&root, "/foo/foo.html");

        assert_eq!(html.matches(" current\"").count(), 1);
        assert_eq!(html.matches("aria-current").count(), 1);
        assert!(html.contains(
            r#"<li class="toc level-2 current" data-level="2"><a class="d-flex flex-items-baseline" href="/foo/foo.html" aria-current="page">Foo</a></li>"#
        ));
    }

    #[test]
    fn test_render_unknown_current_page_marks_nothing() {
        let root = build(&sample_entries(), &DirectoryTitleIndex::new());

        let html = render_sidebar(&root, "/nowhere.html");

        assert!(!html.contains("current"));
    }

    #[test]
    fn test_render_sample_site_directory_order() {
        let titles: DirectoryTitleIndex = [("/foo/", Some("Foo Dir"))].into_iter().collect();
        let root = build(&sample_entries(), &titles);

        let html = render_sidebar(&root, "");

        let positions: Vec<usize> = [
            "href=\"/rootfile.html\"",
            "href=\"/a/\"",
            "href=\"/a/aa.html\"",
            "href=\"/a/aa/\"",
            "href=\"/a/aa/aaa/\"",
            "href=\"/a/aa/aaa/aaaa.html\"",
            "href=\"/a/b/\"",
            "href=\"/a/b/c/\"",
            "href=\"/a/b/c/d1.html\"",
            "href=\"/a/b/c/d2.html\"",
            "href=\"/bar/\"",
            "href=\"/foo/\">Foo Dir",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("{needle} missing")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{html}");
    }

    #[test]
    fn test_render_is_idempotent() {
        let titles: DirectoryTitleIndex = [("/foo/", Some("Foo Dir"))].into_iter().collect();
        let first = render_sidebar(&build(&sample_entries(), &titles), "/a/aa.html");
        let second = render_sidebar(&build(&sample_entries(), &titles), "/a/aa.html");

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_falls_back_to_file_name() {
        let root = build(
            &[PathEntry::new("/untitled.html").with_title("")],
            &DirectoryTitleIndex::new(),
        );

        let html = render_sidebar(&root, "");

        assert!(html.contains(">untitled.html</a>"));
    }

    #[test]
    fn test_render_embeds_titles_verbatim_by_default() {
        let root = build(
            &[PathEntry::new("/a.html").with_title("<b>Bold</b>")],
            &DirectoryTitleIndex::new(),
        );

        let html = render_sidebar(&root, "");

        assert!(html.contains("><b>Bold</b></a>"));
    }

    #[test]
    fn test_render_escapes_when_enabled() {
        let root = build(
            &[PathEntry::new("/a.html").with_title("Q&A <draft>")],
            &DirectoryTitleIndex::new(),
        );

        let html = render_sidebar_with(&root, "", SidebarOptions { escape_html: true });

        assert!(html.contains(">Q&amp;A &lt;draft&gt;</a>"));
    }
}

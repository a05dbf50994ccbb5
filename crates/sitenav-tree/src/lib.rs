//! Page tree and navigation rendering for sitenav.
//!
//! This crate provides:
//! - [`PageTree`]: directory hierarchy built from flat page paths
//! - [`render_sidebar`]: nested HTML navigation for the whole site
//! - [`render_toc`]: Markdown outline of the directory enclosing a page
//!
//! The tree is a plain value: build one per render and drop it afterwards.
//!
//! # Example
//!
//! ```
//! use sitenav_tree::{DirectoryTitleIndex, DuplicatePolicy, PageTree, PathEntry, render_sidebar};
//!
//! let titles: DirectoryTitleIndex = [("/guide/", Some("Guide"))].into_iter().collect();
//! let entries = vec![
//!     PathEntry::new("/index.html").with_title("Home"),
//!     PathEntry::new("/guide/start.html").with_title("Getting Started"),
//! ];
//! let root = PageTree::build(&entries, &titles, DuplicatePolicy::Replace)?;
//!
//! let html = render_sidebar(&root, "/guide/start.html");
//! assert!(html.contains(r#"href="/guide/">Guide</a>"#));
//! # Ok::<(), sitenav_tree::TreeError>(())
//! ```

mod entry;
mod html;
pub mod order;
mod sidebar;
mod titles;
mod toc;
mod tree;

pub use entry::{PathEntry, WebPage};
pub use html::escape_html;
pub use sidebar::{SidebarOptions, render_sidebar, render_sidebar_with};
pub use titles::DirectoryTitleIndex;
pub use toc::{render_toc, render_toc_with};
pub use tree::{
    DuplicatePolicy, Insertion, LookupStrategy, PageTree, PageTreeBuilder, SEPARATOR, TreeError,
};

//! Site adapter for sitenav.
//!
//! Turns the page list exported by a static site generator into the inputs
//! of [`sitenav_tree`] and renders navigation from them:
//! - [`SiteContext`]: dotted-key lookups into a JSON site payload
//! - [`SitePages`]: directory titles and content pages, minus excluded pages
//! - [`SiteNav`]: per-render sidebar and table of contents
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), sitenav_site::SiteError> {
//! use sitenav_site::{SiteContext, SiteNav, SiteOptions, SitePages};
//!
//! let context = SiteContext::from_json(
//!     r#"{"site": {"html_pages": [
//!         {"url": "/guide/", "title": "Guide"},
//!         {"url": "/guide/start.html", "title": "Start"}
//!     ]}}"#,
//! )?;
//! let options = SiteOptions::default();
//! let pages = SitePages::from_context(&context, &options)?;
//! let nav = SiteNav::new(pages, options);
//!
//! let sidebar = nav.sidebar("/guide/start.html")?;
//! assert!(sidebar.contains("Guide"));
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod nav;
mod pages;
mod record;

pub use context::SiteContext;
pub use error::SiteError;
pub use nav::SiteNav;
pub use pages::{SiteOptions, SitePages};
pub use record::{FrontMatter, PageRecord};

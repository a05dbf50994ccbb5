//! Page records as exported by the host site generator.

use serde::Deserialize;

/// Front matter fields the navigation cares about.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    /// Page title.
    pub title: Option<String>,
    /// Explicit ordering hint.
    pub sort: Option<f64>,
}

/// One page of the host's page list.
///
/// Title and sort key may appear at the top level or under `data`, which is
/// where the template engine keeps front matter. Top-level values win.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageRecord {
    /// URL path of the rendered page (e.g., "/guide/start.html").
    pub url: String,
    /// Directory the page lives in (e.g., "/guide/"). Derived from `url`
    /// when absent.
    #[serde(default)]
    pub dir: Option<String>,
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Explicit ordering hint.
    #[serde(default)]
    pub sort: Option<f64>,
    /// Front matter.
    #[serde(default)]
    pub data: FrontMatter,
}

impl PageRecord {
    /// Create a record with only a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            dir: None,
            title: None,
            sort: None,
            data: FrontMatter::default(),
        }
    }

    /// Directory containing the page, including the trailing slash.
    #[must_use]
    pub fn directory(&self) -> &str {
        match &self.dir {
            Some(dir) => dir,
            None => self
                .url
                .rfind('/')
                .map_or("", |idx| &self.url[..=idx]),
        }
    }

    /// Whether this record is the index page of its directory (its URL is
    /// the directory itself).
    #[must_use]
    pub fn is_directory_index(&self) -> bool {
        self.directory() == self.url
    }

    /// Page title, preferring the top-level field over front matter.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().or(self.data.title.as_deref())
    }

    /// Sort key, preferring the top-level field over front matter.
    #[must_use]
    pub fn sort_key(&self) -> Option<f64> {
        self.sort.or(self.data.sort)
    }
}

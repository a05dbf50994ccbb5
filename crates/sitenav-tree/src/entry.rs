//! Page records consumed and produced by the tree builder.

/// A content page as supplied by the host, before it is placed in the tree.
///
/// Entries are immutable snapshots: the builder only reads them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathEntry {
    /// Absolute URL path of the page (e.g., "/a/b/c/d1.html").
    pub path: String,
    /// Display title. `None` or empty falls back to the file name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    /// Explicit ordering hint.
    #[cfg_attr(feature = "serde", serde(default, rename = "sort"))]
    pub sort_key: Option<f64>,
}

impl PathEntry {
    /// Create an entry with no title and no sort key.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            sort_key: None,
        }
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the sort key.
    #[must_use]
    pub fn with_sort_key(mut self, sort_key: f64) -> Self {
        self.sort_key = Some(sort_key);
        self
    }
}

/// A leaf page attached to exactly one directory node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WebPage {
    /// File-name segment (e.g., "d1.html").
    pub file: String,
    /// Absolute URL path.
    pub path: String,
    /// Display title as supplied by the host.
    pub title: Option<String>,
    /// Explicit ordering hint.
    pub sort_key: Option<f64>,
}

impl WebPage {
    /// Title to display, falling back to the file name when the title is
    /// missing or empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.file,
        }
    }
}

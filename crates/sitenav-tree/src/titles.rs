//! Directory title lookup.

use std::collections::HashMap;

/// Maps a directory path (slash-terminated, e.g. "/a/b/") to its title.
///
/// Built once from the directory-index records of a site and only read
/// afterwards. A directory may be present without a title; lookups treat
/// that the same as an unknown directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryTitleIndex {
    titles: HashMap<String, Option<String>>,
}

impl DirectoryTitleIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Title for a directory path, if one was recorded.
    #[must_use]
    pub fn title(&self, directory_path: &str) -> Option<&str> {
        self.titles
            .get(directory_path)
            .and_then(Option::as_deref)
            .filter(|title| !title.is_empty())
    }

    /// Whether the directory has an index record at all.
    #[must_use]
    pub fn contains(&self, directory_path: &str) -> bool {
        self.titles.contains_key(directory_path)
    }

    /// Number of recorded directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether no directories are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for DirectoryTitleIndex
where
    K: Into<String>,
    V: Into<String>,
{
    /// Later pairs for the same directory overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let titles = iter
            .into_iter()
            .map(|(path, title)| (path.into(), title.map(Into::into)))
            .collect();
        Self { titles }
    }
}

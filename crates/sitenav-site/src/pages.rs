//! Selecting navigation pages from the host's page list.

use serde::Deserialize;
use serde_json::Value;
use sitenav_tree::{DirectoryTitleIndex, DuplicatePolicy, LookupStrategy, PathEntry};

use crate::context::SiteContext;
use crate::error::SiteError;
use crate::record::PageRecord;

/// Options controlling page selection and rendering.
#[derive(Clone, Debug)]
pub struct SiteOptions {
    /// Dotted key of the page list in the site payload.
    pub pages_key: String,
    /// URLs dropped from navigation.
    pub exclude: Vec<String>,
    /// URL substrings marking index pages, dropped from the page list.
    pub index_pages: Vec<String>,
    /// Policy for pages sharing a path.
    pub duplicates: DuplicatePolicy,
    /// Directory lookup for the table of contents.
    pub lookup: LookupStrategy,
    /// HTML-escape titles and paths in the sidebar.
    pub escape_html: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            pages_key: "site.html_pages".to_owned(),
            exclude: vec!["/404.html".to_owned(), "/search.html".to_owned()],
            index_pages: vec!["README.html".to_owned()],
            duplicates: DuplicatePolicy::default(),
            lookup: LookupStrategy::default(),
            escape_html: false,
        }
    }
}

impl SiteOptions {
    fn is_excluded(&self, url: &str) -> bool {
        self.exclude.iter().any(|path| path == url)
            || self.index_pages.iter().any(|marker| url.contains(marker.as_str()))
    }
}

/// Snapshot of the inputs a page tree is built from.
#[derive(Clone, Debug, Default)]
pub struct SitePages {
    entries: Vec<PathEntry>,
    titles: DirectoryTitleIndex,
}

impl SitePages {
    /// Split records into directory titles and content pages.
    ///
    /// Directory-index records contribute only their title. Content records
    /// matching `exclude` or `index_pages` are dropped.
    #[must_use]
    pub fn from_records(records: &[PageRecord], options: &SiteOptions) -> Self {
        let titles = records
            .iter()
            .filter(|record| record.is_directory_index())
            .map(|record| (record.directory(), record.title()))
            .collect();

        let entries = records
            .iter()
            .filter(|record| !record.is_directory_index())
            .filter(|record| {
                let excluded = options.is_excluded(&record.url);
                if excluded {
                    tracing::debug!(url = %record.url, "Page excluded from navigation");
                }
                !excluded
            })
            .map(|record| PathEntry {
                path: record.url.clone(),
                title: record.title().map(str::to_owned),
                sort_key: record.sort_key(),
            })
            .collect();

        Self { entries, titles }
    }

    /// Build from a bare list of page URLs, with no titles.
    #[must_use]
    pub fn from_urls<S: AsRef<str>>(urls: &[S], options: &SiteOptions) -> Self {
        let entries = urls
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|url| !options.is_excluded(url))
            .map(PathEntry::new)
            .collect();

        Self {
            entries,
            titles: DirectoryTitleIndex::new(),
        }
    }

    /// Build from a site payload.
    ///
    /// Accepts an array of URL strings, an array of page records, or an
    /// object holding the page records under `options.pages_key`.
    pub fn from_context(
        context: &SiteContext,
        options: &SiteOptions,
    ) -> Result<Self, SiteError> {
        match context.root() {
            Value::Array(items) if items.iter().all(Value::is_string) => {
                let urls = Vec::<String>::deserialize(context.root())?;
                Ok(Self::from_urls(&urls, options))
            }
            Value::Array(_) => {
                let records = Vec::<PageRecord>::deserialize(context.root())?;
                Ok(Self::from_records(&records, options))
            }
            _ => {
                let records = context.pages(&options.pages_key)?;
                Ok(Self::from_records(&records, options))
            }
        }
    }

    /// Content pages that become tree leaves.
    #[must_use]
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    /// Directory titles.
    #[must_use]
    pub fn titles(&self) -> &DirectoryTitleIndex {
        &self.titles
    }
}

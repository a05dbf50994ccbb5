//! Directory tree built from flat page paths.
//!
//! Every node stores its own absolute directory path, computed once when the
//! node is created. Pages and child directories are kept sorted on insertion
//! using the comparators in [`crate::order`], so iteration order is the
//! rendering order.

use std::fmt;

use crate::entry::{PathEntry, WebPage};
use crate::order::{compare_directories, compare_pages};
use crate::titles::DirectoryTitleIndex;

/// Path separator for URL paths.
pub const SEPARATOR: char = '/';

/// Error raised while building a page tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The path cannot be split into directory and file segments.
    #[error("Invalid page path '{path}': {reason}")]
    InvalidPath {
        /// Offending path as supplied.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Two entries resolve to the same page and duplicates are rejected.
    #[error("Duplicate page path: {path}")]
    DuplicateLeaf {
        /// Path shared by both entries.
        path: String,
    },
}

/// How [`PageTree::subtree_at_with`] decides which segments are directories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum LookupStrategy {
    /// Drop every segment containing "html"; the rest are directories.
    ///
    /// Matches historical output but misreads directories such as
    /// `html-docs`.
    #[default]
    HtmlHeuristic,
    /// The last segment is the page unless the path ends with `/`.
    LastSegment,
}

/// What to do when two entries resolve to the same page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum DuplicatePolicy {
    /// The later entry replaces the earlier one.
    #[default]
    Replace,
    /// Fail with [`TreeError::DuplicateLeaf`].
    Reject,
}

/// Outcome of a successful insertion.
#[derive(Debug, PartialEq)]
pub enum Insertion {
    /// The page was new.
    Added,
    /// The page replaced an earlier page with the same path.
    Replaced(WebPage),
}

/// One directory level of the site.
#[derive(Clone, Debug, PartialEq)]
pub struct PageTree {
    depth: usize,
    directory_name: String,
    directory_path: String,
    title: Option<String>,
    pages: Vec<WebPage>,
    children: Vec<PageTree>,
}

impl PageTree {
    /// Create an empty root node.
    #[must_use]
    pub fn root(titles: &DirectoryTitleIndex) -> Self {
        let directory_path = SEPARATOR.to_string();
        Self {
            depth: 0,
            directory_name: String::new(),
            title: titles.title(&directory_path).map(str::to_owned),
            directory_path,
            pages: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Build a tree from a complete collection of entries.
    ///
    /// Stops at the first malformed path: a partial tree would misrepresent
    /// the site.
    pub fn build<'e>(
        entries: impl IntoIterator<Item = &'e PathEntry>,
        titles: &DirectoryTitleIndex,
        duplicates: DuplicatePolicy,
    ) -> Result<Self, TreeError> {
        let mut builder = PageTreeBuilder::new(titles).with_duplicate_policy(duplicates);
        for entry in entries {
            builder.insert(entry)?;
        }
        Ok(builder.build())
    }

    fn directory(parent: &Self, name: &str, titles: &DirectoryTitleIndex) -> Self {
        let directory_path = format!("{}{name}{SEPARATOR}", parent.directory_path);
        Self {
            depth: parent.depth + 1,
            directory_name: name.to_owned(),
            title: titles.title(&directory_path).map(str::to_owned),
            directory_path,
            pages: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Distance from the root (root is 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Path segment this node represents (empty for the root).
    #[must_use]
    pub fn directory_name(&self) -> &str {
        &self.directory_name
    }

    /// Absolute, slash-terminated directory path (e.g., "/a/b/").
    #[must_use]
    pub fn directory_path(&self) -> &str {
        &self.directory_path
    }

    /// Directory title from the title index, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title to display, falling back to the directory name.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title().unwrap_or(&self.directory_name)
    }

    /// Pages directly in this directory, in rendering order.
    #[must_use]
    pub fn pages(&self) -> &[WebPage] {
        &self.pages
    }

    /// Child directories, in rendering order.
    #[must_use]
    pub fn children(&self) -> &[PageTree] {
        &self.children
    }

    /// Total number of pages in this subtree.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len() + self.children.iter().map(Self::page_count).sum::<usize>()
    }

    /// Child directory by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&PageTree> {
        self.children
            .binary_search_by(|child| child.directory_name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.children[idx])
    }

    /// Node enclosing the page at `path`, using the default lookup strategy.
    ///
    /// `"/a/b/c/README.html"` resolves to the node for `c`.
    #[must_use]
    pub fn subtree_at(&self, path: &str) -> Option<&PageTree> {
        self.subtree_at_with(path, LookupStrategy::default())
    }

    /// Node enclosing the page at `path`.
    ///
    /// Returns `None` as soon as a directory segment has no matching child.
    #[must_use]
    pub fn subtree_at_with(&self, path: &str, strategy: LookupStrategy) -> Option<&PageTree> {
        let segments = path.split(SEPARATOR).filter(|segment| !segment.is_empty());
        let directories: Vec<&str> = match strategy {
            LookupStrategy::HtmlHeuristic => {
                segments.filter(|segment| !segment.contains("html")).collect()
            }
            LookupStrategy::LastSegment => {
                let mut directories: Vec<&str> = segments.collect();
                if !path.ends_with(SEPARATOR) {
                    directories.pop();
                }
                directories
            }
        };

        directories
            .into_iter()
            .try_fold(self, |node, name| node.child(name))
    }

    fn child_or_insert(&mut self, name: &str, titles: &DirectoryTitleIndex) -> &mut PageTree {
        let idx = match self
            .children
            .binary_search_by(|child| child.directory_name.as_str().cmp(name))
        {
            Ok(idx) => idx,
            Err(idx) => {
                let child = Self::directory(self, name, titles);
                self.children.insert(idx, child);
                debug_assert!(
                    self.children
                        .windows(2)
                        .all(|pair| compare_directories(&pair[0], &pair[1]).is_lt())
                );
                idx
            }
        };
        &mut self.children[idx]
    }

    fn attach_page(
        &mut self,
        page: WebPage,
        policy: DuplicatePolicy,
    ) -> Result<Insertion, TreeError> {
        let previous = match self.pages.iter().position(|p| p.file == page.file) {
            Some(_) if policy == DuplicatePolicy::Reject => {
                return Err(TreeError::DuplicateLeaf { path: page.path });
            }
            Some(idx) => Some(self.pages.remove(idx)),
            None => None,
        };

        let idx = self
            .pages
            .binary_search_by(|p| compare_pages(p, &page))
            .unwrap_or_else(|idx| idx);
        self.pages.insert(idx, page);

        Ok(previous.map_or(Insertion::Added, Insertion::Replaced))
    }

    fn fmt_level(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        write!(f, "{pad}{} [depth {}]", self.directory_path, self.depth)?;
        if let Some(title) = &self.title {
            write!(f, " \"{title}\"")?;
        }
        writeln!(f)?;
        for page in &self.pages {
            write!(f, "{pad}  - {}", page.file)?;
            if let Some(title) = &page.title {
                write!(f, " \"{title}\"")?;
            }
            if let Some(sort_key) = page.sort_key {
                write!(f, " sort={sort_key}")?;
            }
            writeln!(f)?;
        }
        for child in &self.children {
            child.fmt_level(f, indent + 2)?;
        }
        Ok(())
    }
}

impl fmt::Display for PageTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_level(f, 0)
    }
}

/// Incremental builder for a [`PageTree`].
pub struct PageTreeBuilder<'a> {
    root: PageTree,
    titles: &'a DirectoryTitleIndex,
    duplicates: DuplicatePolicy,
}

impl<'a> PageTreeBuilder<'a> {
    /// Create a builder with an empty root.
    #[must_use]
    pub fn new(titles: &'a DirectoryTitleIndex) -> Self {
        Self {
            root: PageTree::root(titles),
            titles,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Set the policy for entries resolving to an existing page.
    #[must_use]
    pub fn with_duplicate_policy(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Place an entry in the tree, creating intermediate directories.
    ///
    /// Directories already present are reused.
    pub fn insert(&mut self, entry: &PathEntry) -> Result<Insertion, TreeError> {
        let segments = split_page_path(&entry.path)?;
        let Some((file, directories)) = segments.split_last() else {
            return Err(invalid_path(&entry.path, "has no segments"));
        };

        let titles = self.titles;
        let mut node = &mut self.root;
        for name in directories {
            node = node.child_or_insert(name, titles);
        }

        let page = WebPage {
            file: (*file).to_owned(),
            path: entry.path.clone(),
            title: entry.title.clone(),
            sort_key: entry.sort_key,
        };
        let insertion = node.attach_page(page, self.duplicates)?;
        if let Insertion::Replaced(previous) = &insertion {
            tracing::warn!(
                path = %entry.path,
                previous_title = previous.title.as_deref().unwrap_or_default(),
                "Duplicate page path, keeping the later entry"
            );
        }
        Ok(insertion)
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> PageTree {
        tracing::debug!(
            pages = self.root.page_count(),
            directories = self.root.children.len(),
            "Page tree built"
        );
        self.root
    }
}

fn invalid_path(path: &str, reason: &'static str) -> TreeError {
    TreeError::InvalidPath {
        path: path.to_owned(),
        reason,
    }
}

/// Split an absolute page path into its segments.
fn split_page_path(path: &str) -> Result<Vec<&str>, TreeError> {
    let Some(rest) = path.strip_prefix(SEPARATOR) else {
        return Err(invalid_path(path, "must start with '/'"));
    };
    if rest.is_empty() {
        return Err(invalid_path(path, "has no segments"));
    }

    let segments: Vec<&str> = rest.split(SEPARATOR).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(invalid_path(path, "contains an empty segment"));
    }
    Ok(segments)
}

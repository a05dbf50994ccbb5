//! Ordering rules for pages and directories within a node.

use std::cmp::Ordering;

use crate::entry::WebPage;
use crate::tree::PageTree;

/// Total order for pages sharing a directory.
///
/// Pages with a sort key come first, ascending by key. Pages without a
/// key, and pages with equal keys, are ordered by file name.
pub fn compare_pages(a: &WebPage, b: &WebPage) -> Ordering {
    let by_key = match (a.sort_key, b.sort_key) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_key.then_with(|| a.file.cmp(&b.file))
}

/// Order for sibling directories: lexical by name.
pub fn compare_directories(a: &PageTree, b: &PageTree) -> Ordering {
    a.directory_name().cmp(b.directory_name())
}

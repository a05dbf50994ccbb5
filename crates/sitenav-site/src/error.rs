//! Site adapter error types.

use sitenav_tree::TreeError;

/// Error raised while turning a site payload into navigation.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A page path could not be placed in the tree.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// The payload is not valid JSON or does not match the record shape.
    #[error("Invalid site data: {0}")]
    Json(#[from] serde_json::Error),
    /// A dotted key does not resolve.
    #[error("Key '{0}' not found in site data")]
    MissingKey(String),
    /// A dotted key resolves to the wrong kind of value.
    #[error("Expected {expected} at '{key}'")]
    InvalidShape {
        /// Dotted key that was looked up.
        key: String,
        /// What the value should have been.
        expected: &'static str,
    },
}

//! Dotted-key access into a site payload.

use serde::Deserialize;
use serde_json::Value;

use crate::error::SiteError;
use crate::record::PageRecord;

/// Template-engine style view over a JSON site payload.
///
/// Keys like `site.html_pages` are resolved one segment at a time; numeric
/// segments index into arrays.
#[derive(Clone, Debug)]
pub struct SiteContext {
    root: Value,
}

impl SiteContext {
    /// Wrap a parsed payload.
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// The whole payload.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve a dotted key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.').try_fold(&self.root, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Resolve a dotted key to a list of page records.
    pub fn pages(&self, key: &str) -> Result<Vec<PageRecord>, SiteError> {
        let value = self
            .lookup(key)
            .ok_or_else(|| SiteError::MissingKey(key.to_owned()))?;
        if !value.is_array() {
            return Err(SiteError::InvalidShape {
                key: key.to_owned(),
                expected: "an array of pages",
            });
        }
        Ok(Vec::deserialize(value)?)
    }

    /// Resolve a dotted key to a string.
    pub fn string(&self, key: &str) -> Result<&str, SiteError> {
        self.lookup(key)
            .ok_or_else(|| SiteError::MissingKey(key.to_owned()))?
            .as_str()
            .ok_or_else(|| SiteError::InvalidShape {
                key: key.to_owned(),
                expected: "a string",
            })
    }
}

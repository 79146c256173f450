//! # Request Parameters
//!
//! Flat, alphabetically ordered query parameters for one rate API call.
//!
//! Parameter sets are built in layers (account, variant, package) and merged
//! with later layers taking precedence. Keys are kept in a `BTreeMap` so the
//! rendered query string is deterministic.
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::domain::value_objects::request_params::RequestParams;
//!
//! let shared = RequestParams::new().with("account_number", "91833337");
//! let package = RequestParams::new().with("weight", 1).with("length", 19);
//!
//! let merged = shared.merge(package);
//! let keys: Vec<&str> = merged.keys().collect();
//! assert_eq!(keys, ["account_number", "length", "weight"]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sorted key/value parameters for a rate request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParams(BTreeMap<String, String>);

impl RequestParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any existing value for the key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Merges `other` over `self`; keys present in both take `other`'s value.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the key/value pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a RequestParams {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_later_layer() {
        let base = RequestParams::new().with("weight", 1).with("value", 0);
        let merged = base.merge(RequestParams::new().with("weight", 4));
        assert_eq!(merged.get("weight"), Some("4"));
        assert_eq!(merged.get("value"), Some("0"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn iteration_is_sorted() {
        let params = RequestParams::new()
            .with("width", 14)
            .with("account_number", "91833337")
            .with("height", 2);
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(
            pairs,
            [("account_number", "91833337"), ("height", "2"), ("width", "14")]
        );
    }

    #[test]
    fn empty_params() {
        let params = RequestParams::new();
        assert!(params.is_empty());
        assert!(!params.contains("weight"));
    }
}

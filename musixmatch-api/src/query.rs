//! Canonical request parameters.
//!
//! A [`QueryString`] keeps its parameters sorted by key, so two query strings
//! with the same content always encode to the same text and hash the same.
//! That makes them usable as cache keys:
//!
//! ```
//! use musixmatch_api::QueryString;
//!
//! let qs = QueryString::new()
//!     .with("page_size", 3)
//!     .with("country", "it")
//!     .with("page", 1);
//! assert_eq!(qs.to_string(), "country=it&page=1&page_size=3");
//! ```
//!
//! The `apikey` parameter is kept in the encoded form but never shown by
//! `Debug`, so query strings can be logged safely.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Name of the credential parameter hidden from logs.
pub const APIKEY: &str = "apikey";

/// Name of the parameter selecting the response parser.
pub const FORMAT: &str = "format";

const MASK: &str = "***";

/// Sorted, URL-encodable set of request parameters.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryString {
    params: BTreeMap<String, String>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a parameter, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.params.insert(key.into(), value.to_string())
    }

    /// Insert a parameter only if the key is not present yet.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl ToString) -> &str {
        self.params
            .entry(key.into())
            .or_insert_with(|| value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Merge `other` into `self`; values from `other` win.
    pub fn merge(&mut self, other: QueryString) {
        self.params.extend(other.params);
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.params.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// URL-encoded `key=value&key=value` form, keys ascending.
    pub fn encode(&self) -> String {
        self.encode_with(|_, value| value)
    }

    /// Like [`encode`](Self::encode) but with the apikey value masked.
    pub fn redacted(&self) -> String {
        self.encode_with(|key, value| if key == APIKEY { MASK } else { value })
    }

    fn encode_with<'a>(&'a self, value_of: impl Fn(&str, &'a str) -> &'a str) -> String {
        self.params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value_of(key, value))
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: BTreeMap<_, _> = self
            .params
            .iter()
            .filter(|(key, _)| key.as_str() != APIKEY)
            .collect();
        write!(f, "QueryString({visible:?})")
    }
}

impl From<BTreeMap<String, String>> for QueryString {
    fn from(params: BTreeMap<String, String>) -> Self {
        Self { params }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut qs = Self::new();
        qs.extend(iter);
        qs
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for QueryString {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a QueryString {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

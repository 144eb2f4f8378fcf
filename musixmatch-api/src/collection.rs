//! Deduplicated, pageable lists of items.
//!
//! List endpoints (searches, charts, album tracks, ...) answer with
//! `body.<label>_list`, an array of single-key wrappers:
//!
//! ```json
//! { "track_list": [ { "track": { "track_id": 1, ... } },
//!                   { "track": { "track_id": 2, ... } } ] }
//! ```
//!
//! An [`ItemsCollection`] never holds two items with the same id: inserting a
//! duplicate is a no-op.

use crate::client::MusixmatchClient;
use crate::error::{MusixmatchError, Result};
use crate::item::Item;
use crate::message::ResponseMessage;
use crate::method::Method;
use crate::query::QueryString;
use serde_json::{Map, Value};
use std::iter::FusedIterator;
use std::ops::{Index, Range};
use std::slice;

/// Ordered list of unique `T`s.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsCollection<T> {
    items: Vec<T>,
}

impl<T> Default for ItemsCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Item + Clone> ItemsCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body key of the list, e.g. `track_list`.
    pub fn label() -> String {
        format!("{}_list", T::LABEL)
    }

    /// Build from `body.<label>_list` of a successful message.
    pub fn from_message(message: &ResponseMessage) -> Result<Self> {
        message.ensure_success()?;
        let label = Self::label();
        let list = message
            .body()?
            .get(&label)
            .and_then(Value::as_array)
            .ok_or_else(|| MusixmatchError::Lookup(format!("body.{label}")))?;

        let mut collection = Self::new();
        for wrapper in list {
            let value = wrapper
                .get(T::LABEL)
                .ok_or_else(|| MusixmatchError::Lookup(format!("body.{label}[].{}", T::LABEL)))?;
            collection.push(T::from_value(value)?);
        }
        Ok(collection)
    }

    /// Call a list method and build the collection from its answer.
    pub fn fetch(client: &MusixmatchClient, method: impl Into<Method>, params: QueryString) -> Result<Self> {
        let message = client.call(method, params)?;
        Self::from_message(&message)
    }

    /// Insert at `index` (clamped to the length). Returns `false`, leaving
    /// the collection unchanged, if an item with the same id is present.
    pub fn insert(&mut self, index: usize, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        true
    }

    pub fn push(&mut self, item: T) -> bool {
        self.insert(self.items.len(), item)
    }

    /// Build a `T` from a raw mapping and insert it.
    pub fn insert_map(&mut self, index: usize, fields: Map<String, Value>) -> Result<bool> {
        Ok(self.insert(index, T::from_map(fields)?))
    }

    pub fn push_map(&mut self, fields: Map<String, Value>) -> Result<bool> {
        self.insert_map(self.items.len(), fields)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        let id = item.id();
        self.items.iter().position(|i| i.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Items in `range` as a new collection; bounds are clamped to the length.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.items.len());
        let start = range.start.min(end);
        Self {
            items: self.items[start..end].to_vec(),
        }
    }

    /// A copy of `self` extended with `other`, duplicates skipped.
    #[must_use]
    pub fn concat(&self, other: impl IntoIterator<Item = T>) -> Self {
        let mut collection = self.clone();
        collection.extend(other);
        collection
    }

    /// Number of pages holding at most `page_size` items each.
    pub fn pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.items.len().div_ceil(page_size)
    }

    /// Page `page_index` (0-based); empty past the end.
    pub fn page(&self, page_index: usize, page_size: usize) -> Self {
        let start = page_index.saturating_mul(page_size);
        Self {
            items: self.items.iter().skip(start).take(page_size).cloned().collect(),
        }
    }

    /// All pages, built eagerly.
    pub fn paged(&self, page_size: usize) -> Vec<Self> {
        self.pager(page_size).collect()
    }

    /// All pages, built one at a time.
    pub fn pager(&self, page_size: usize) -> Pager<'_, T> {
        Pager {
            collection: self,
            page_size,
            next: 0,
            total: self.pages(page_size),
        }
    }
}

impl<T: Item + Clone> Extend<T> for ItemsCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Item + Clone> FromIterator<T> for ItemsCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<T> IntoIterator for ItemsCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ItemsCollection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for ItemsCollection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

/// Lazy page iterator returned by [`ItemsCollection::pager`].
pub struct Pager<'a, T> {
    collection: &'a ItemsCollection<T>,
    page_size: usize,
    next: usize,
    total: usize,
}

impl<T: Item + Clone> Iterator for Pager<'_, T> {
    type Item = ItemsCollection<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let page = self.collection.page(self.next, self.page_size);
        self.next += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl<T: Item + Clone> ExactSizeIterator for Pager<'_, T> {}

impl<T: Item + Clone> FusedIterator for Pager<'_, T> {}

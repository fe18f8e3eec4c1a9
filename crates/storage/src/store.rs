//! Authoritative key-value store
//!
//! `Store` holds the key → value mapping together with its derived
//! [`ValueIndex`]. It knows nothing about transactions: the engine layers
//! undo tracking on top and drives every mutation through `set`/`unset`.
//!
//! All operations are O(1) expected time.

use rustc_hash::FxHashMap;
use simpledb_core::{Error, Result};
use std::collections::BTreeMap;

use crate::index::ValueIndex;

/// In-memory key-value store with a value → count reverse index.
///
/// # Invariant
///
/// For every value `v` in the index, `count(v)` equals the number of keys
/// mapped to `v`, and is strictly positive. `set` and `unset` are the only
/// mutators and both maintain this.
///
/// # Example
///
/// ```
/// use simpledb_storage::Store;
///
/// let mut store = Store::new();
/// store.set("a", "10");
/// store.set("b", "10");
/// assert_eq!(store.count_equal_to("10"), 2);
///
/// store.unset("a").unwrap();
/// assert_eq!(store.get("a"), None);
/// assert_eq!(store.count_equal_to("10"), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    /// HashMap with FxHash for O(1) lookups
    entries: FxHashMap<String, String>,
    /// value → number of keys holding it
    index: ValueIndex,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            index: ValueIndex::new(),
        }
    }

    /// Bind `key` to `value`
    ///
    /// If the key already held a value, that value's count is decremented
    /// (and dropped at zero) before the new value is counted.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        if let Some(old) = self.entries.get(&key) {
            self.index.decrement(old);
        }
        self.index.increment(&value);
        self.entries.insert(key, value)
    }

    /// Remove `key`
    ///
    /// Returns the removed value.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the key is absent. Nothing is
    /// modified in that case.
    pub fn unset(&mut self, key: &str) -> Result<String> {
        let old = self
            .entries
            .remove(key)
            .ok_or_else(|| Error::key_not_found(key))?;
        self.index.decrement(&old);
        Ok(old)
    }

    /// Look up the value bound to `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of keys currently bound to `value`
    pub fn count_equal_to(&self, value: &str) -> u64 {
        self.index.count(value)
    }

    /// Check whether `key` is bound
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Read-only view of the reverse index
    pub fn index(&self) -> &ValueIndex {
        &self.index
    }

    /// Copy the entries into a key-ordered map
    ///
    /// O(n). Intended for tests, diagnostics and dumps, not the hot path.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Recompute the reverse index from the entries and compare
    ///
    /// O(n). Returns `true` when the maintained index matches exactly.
    pub fn is_consistent(&self) -> bool {
        let mut expected = ValueIndex::new();
        for value in self.entries.values() {
            expected.increment(value);
        }
        expected == self.index
    }
}

//! Reverse index for value-equality counting
//!
//! `ValueIndex` maps each value to the number of keys currently holding it,
//! turning `count_equal_to` from a scan over every entry into an O(1)
//! lookup. The index is derived data: `Store` keeps it in step with its
//! entries on every `set`/`unset`.

use rustc_hash::FxHashMap;

/// Secondary index: Value → number of keys holding it
///
/// Counts never reach zero while stored: the entry for a value is removed
/// as soon as its last key moves away, so the number of entries in the
/// index equals the number of distinct live values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueIndex {
    counts: FxHashMap<String, u64>,
}

impl ValueIndex {
    /// Create a new empty ValueIndex
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Record one more key holding `value`
    ///
    /// Creates the entry with a count of 1 if the value is new.
    pub fn increment(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
    }

    /// Record one fewer key holding `value`
    ///
    /// Removes the entry when the count drops to zero. Decrementing a value
    /// that is not indexed is a no-op.
    pub fn decrement(&mut self, value: &str) {
        if let Some(count) = self.counts.get_mut(value) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(value);
            }
        }
    }

    /// Number of keys holding `value`, or 0 if none do
    pub fn count(&self, value: &str) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Iterate over `(value, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(v, c)| (v.as_str(), *c))
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the number of distinct values in the index
    pub fn len(&self) -> usize {
        self.counts.len()
    }
}

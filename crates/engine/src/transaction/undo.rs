//! Undo records
//!
//! An undo record is the minimal data needed to invert one mutation: the
//! value a key held just before the mutation, or the fact that it held
//! nothing. Records are captured when the mutation executes and are never
//! recomputed later.

use serde::{Deserialize, Serialize};
use simpledb_storage::Store;

/// Inverse of one `Set` or `Unset`, as observed when it was applied.
///
/// | Mutation | Key existed before? | Record |
/// |----------|---------------------|--------|
/// | `Set` | yes, holding `p` | `Restore { key, prior: p }` |
/// | `Set` | no | `Delete { key }` |
/// | `Unset` (effective) | yes, holding `p` | `Restore { key, prior: p }` |
///
/// An `Unset` on an absent key mutates nothing and records nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoRecord {
    /// Put `prior` back under `key`
    Restore {
        /// Key to restore
        key: String,
        /// Value the key held before the mutation
        prior: String,
    },
    /// Remove `key`, which did not exist before the mutation
    Delete {
        /// Key to remove
        key: String,
    },
}

impl UndoRecord {
    /// Build the record for a `Set` given the value the key held beforehand.
    pub fn for_set(key: impl Into<String>, prior: Option<String>) -> Self {
        let key = key.into();
        match prior {
            Some(prior) => UndoRecord::Restore { key, prior },
            None => UndoRecord::Delete { key },
        }
    }

    /// Build the record for an effective `Unset` of a key that held `prior`.
    pub fn for_unset(key: impl Into<String>, prior: impl Into<String>) -> Self {
        UndoRecord::Restore {
            key: key.into(),
            prior: prior.into(),
        }
    }

    /// Key this record targets
    pub fn key(&self) -> &str {
        match self {
            UndoRecord::Restore { key, .. } | UndoRecord::Delete { key } => key,
        }
    }

    /// Apply the record directly to the store.
    ///
    /// Goes straight to `Store`, so replaying a record never produces a new
    /// undo record.
    pub fn apply(self, store: &mut Store) {
        match self {
            UndoRecord::Restore { key, prior } => {
                store.set(key, prior);
            }
            UndoRecord::Delete { key } => {
                if let Err(e) = store.unset(&key) {
                    // Only reachable if the store was mutated behind the engine's back
                    tracing::warn!(key = %key, error = %e, "undo delete found no key");
                }
            }
        }
    }
}

//! A single open transaction: an ordered undo log
//!
//! Records are appended oldest first. Rollback walks them newest first so
//! that several mutations of the same key unwind to the state the key had
//! before the transaction began.

use serde::{Deserialize, Serialize};
use simpledb_storage::Store;

use super::undo::UndoRecord;

/// Identifier assigned to a transaction when it begins.
///
/// Unique within one engine; used for logging and inspection only.
pub type TxnId = u64;

/// An open transaction scope and the undo records collected since `Begin`.
///
/// Only effective mutations are recorded; reads never touch the log.
/// Memory is O(M) in the number of mutations performed inside the scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TxnId,
    records: Vec<UndoRecord>,
}

impl Transaction {
    /// Create an empty transaction
    pub fn new(id: TxnId) -> Self {
        Self {
            id,
            records: Vec::new(),
        }
    }

    /// Transaction identifier
    pub fn id(&self) -> TxnId {
        self.id
    }

    /// Append an undo record at the tail of the log
    pub fn record(&mut self, record: UndoRecord) {
        self.records.push(record);
    }

    /// Undo records, oldest first
    pub fn records(&self) -> &[UndoRecord] {
        &self.records
    }

    /// Number of undo records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no mutation has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replay the log against `store` in reverse recording order.
    ///
    /// Consumes the transaction. Returns the number of records applied.
    pub fn rollback(self, store: &mut Store) -> usize {
        let applied = self.records.len();
        for record in self.records.into_iter().rev() {
            record.apply(store);
        }
        applied
    }
}

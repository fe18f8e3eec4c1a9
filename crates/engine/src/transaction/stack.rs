//! Stack of open transactions
//!
//! The innermost transaction (most recent `Begin`) sits on top. Depth is the
//! number of unmatched `Begin`s since the last commit or since creation.
//!
//! State machine on depth `d`:
//! - push: `d → d + 1`
//! - pop: `d → d - 1` (no-op at 0)
//! - clear: any `d → 0`

use super::log::{Transaction, TxnId};
use super::undo::UndoRecord;

/// Ordered stack of open transactions.
#[derive(Debug)]
pub struct TransactionStack {
    transactions: Vec<Transaction>,
    next_id: TxnId,
}

impl TransactionStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Open a new innermost transaction and return its id
    pub fn push(&mut self) -> TxnId {
        let id = self.next_id;
        self.next_id += 1;
        self.transactions.push(Transaction::new(id));
        id
    }

    /// Remove and return the innermost transaction
    pub fn pop(&mut self) -> Option<Transaction> {
        self.transactions.pop()
    }

    /// Discard every open transaction without applying any undo log
    ///
    /// Returns the number of transactions discarded.
    pub fn clear(&mut self) -> usize {
        let discarded = self.transactions.len();
        self.transactions.clear();
        discarded
    }

    /// Append `record` to the innermost transaction
    ///
    /// Returns `false` (and drops the record) when no transaction is open.
    pub fn record(&mut self, record: UndoRecord) -> bool {
        match self.transactions.last_mut() {
            Some(txn) => {
                txn.record(record);
                true
            }
            None => false,
        }
    }

    /// Innermost transaction, if any
    pub fn top(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Open transactions, outermost first
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Number of open transactions
    pub fn depth(&self) -> usize {
        self.transactions.len()
    }

    /// Check if no transaction is open
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Total undo records held across all open transactions
    pub fn pending_records(&self) -> usize {
        self.transactions.iter().map(Transaction::len).sum()
    }
}

impl Default for TransactionStack {
    fn default() -> Self {
        Self::new()
    }
}

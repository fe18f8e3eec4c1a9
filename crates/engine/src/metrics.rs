//! Transaction metrics
//!
//! Counters describing transaction lifecycle activity since the engine was
//! created. Purely observational: nothing in the engine reads them back.

use serde::{Deserialize, Serialize};

/// Transaction metrics snapshot
///
/// Provides statistics about transaction lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMetrics {
    /// Number of currently open transactions
    pub active_count: u64,
    /// Total number of transactions begun
    pub total_begun: u64,
    /// Total number of transactions finalized by a commit
    ///
    /// A commit at depth `d` finalizes `d` transactions.
    pub total_committed: u64,
    /// Total number of transactions rolled back
    pub total_rolled_back: u64,
    /// Total undo records replayed by rollbacks
    pub undo_records_applied: u64,
    /// Commit or rollback requests issued with no open transaction
    pub no_transaction_requests: u64,
}

impl TransactionMetrics {
    /// Total transactions that completed (committed + rolled back)
    pub fn total_completed(&self) -> u64 {
        self.total_committed + self.total_rolled_back
    }

    /// Rollback rate (rolled back / begun)
    pub fn rollback_rate(&self) -> f64 {
        if self.total_begun > 0 {
            self.total_rolled_back as f64 / self.total_begun as f64
        } else {
            0.0
        }
    }
}

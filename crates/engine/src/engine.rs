//! The transaction engine - single entry point to simpledb.
//!
//! [`TransactionEngine`] owns the [`Store`] and the [`TransactionStack`].
//! Every command goes through [`TransactionEngine::apply`]; mutations are
//! applied to the store immediately and their inverses are recorded in the
//! innermost open transaction so that `Rollback` can unwind them.
//!
//! # Usage
//!
//! ```
//! use simpledb_engine::{Command, Output, TransactionEngine};
//!
//! let mut engine = TransactionEngine::new();
//!
//! engine.apply(Command::Set { key: "a".into(), value: "10".into() });
//! engine.apply(Command::Begin);
//! engine.apply(Command::Set { key: "a".into(), value: "20".into() });
//! engine.apply(Command::Rollback);
//!
//! let out = engine.apply(Command::Get { key: "a".into() });
//! assert_eq!(out, Output::Maybe(Some("10".into())));
//! ```

use simpledb_core::{Command, Output};
use simpledb_storage::Store;

use crate::metrics::TransactionMetrics;
use crate::transaction::{TransactionStack, UndoRecord};

/// Store plus nested-transaction undo tracking.
///
/// Single-threaded: all state is exclusively owned and only mutated via
/// `apply(&mut self, ..)`. Multi-client access would need a mutual
/// exclusion boundary around `apply`.
///
/// `apply` is total. Absent keys and commit/rollback without an open
/// transaction are reported through [`Output`], never as errors, and
/// leave all state untouched.
#[derive(Debug, Default)]
pub struct TransactionEngine {
    store: Store,
    stack: TransactionStack,
    metrics: TransactionMetrics,
}

impl TransactionEngine {
    /// Create an engine over an empty store.
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    /// Create an engine over an existing store.
    ///
    /// The store's current contents are the base state; no transaction is
    /// open.
    pub fn with_store(store: Store) -> Self {
        Self {
            store,
            stack: TransactionStack::new(),
            metrics: TransactionMetrics::default(),
        }
    }

    /// Apply a single command.
    pub fn apply(&mut self, cmd: Command) -> Output {
        tracing::trace!(command = cmd.name(), depth = self.stack.depth(), "apply");

        match cmd {
            // Data commands
            Command::Set { key, value } => self.handle_set(key, value),
            Command::Unset { key } => self.handle_unset(key),
            Command::Get { key } => Output::Maybe(self.store.get(&key).map(str::to_string)),
            Command::CountEqualTo { value } => Output::Count(self.store.count_equal_to(&value)),

            // Transaction lifecycle commands
            Command::Begin => self.handle_begin(),
            Command::Commit => self.handle_commit(),
            Command::Rollback => self.handle_rollback(),
        }
    }

    /// Apply a batch of commands in order.
    ///
    /// Returns one output per command, in the same order.
    pub fn execute_many(&mut self, cmds: impl IntoIterator<Item = Command>) -> Vec<Output> {
        cmds.into_iter().map(|cmd| self.apply(cmd)).collect()
    }

    /// Read-only access to the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Read-only access to the open transactions.
    pub fn transactions(&self) -> &TransactionStack {
        &self.stack
    }

    /// Number of open transactions.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Returns whether at least one transaction is open.
    pub fn in_transaction(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Undo records held across all open transactions.
    pub fn pending_undo(&self) -> usize {
        self.stack.pending_records()
    }

    /// Get transaction metrics
    ///
    /// Returns current snapshot of transaction statistics.
    pub fn metrics(&self) -> TransactionMetrics {
        TransactionMetrics {
            active_count: self.stack.depth() as u64,
            ..self.metrics
        }
    }

    // =========================================================================
    // Data handlers
    // =========================================================================

    fn handle_set(&mut self, key: String, value: String) -> Output {
        // The prior value is captured by the store's own replace
        let prior = self.store.set(key.clone(), value);
        self.stack.record(UndoRecord::for_set(key, prior));
        Output::Unit
    }

    fn handle_unset(&mut self, key: String) -> Output {
        match self.store.unset(&key) {
            Ok(prior) => {
                self.stack.record(UndoRecord::for_unset(key, prior));
                Output::Unit
            }
            // Nothing changed, so nothing to undo
            Err(_) => Output::NotFound,
        }
    }

    // =========================================================================
    // Transaction lifecycle handlers
    // =========================================================================

    fn handle_begin(&mut self) -> Output {
        let id = self.stack.push();
        self.metrics.total_begun += 1;
        tracing::debug!(txn_id = id, depth = self.stack.depth(), "transaction begun");
        Output::Unit
    }

    fn handle_commit(&mut self) -> Output {
        if self.stack.is_empty() {
            self.metrics.no_transaction_requests += 1;
            tracing::debug!("commit with no open transaction");
            return Output::NoTransaction;
        }

        let discarded_records = self.stack.pending_records();
        let committed = self.stack.clear();
        self.metrics.total_committed += committed as u64;
        tracing::debug!(
            transactions = committed,
            discarded_records,
            "committed all open transactions"
        );
        Output::Unit
    }

    fn handle_rollback(&mut self) -> Output {
        let Some(txn) = self.stack.pop() else {
            self.metrics.no_transaction_requests += 1;
            tracing::debug!("rollback with no open transaction");
            return Output::NoTransaction;
        };

        let id = txn.id();
        let applied = txn.rollback(&mut self.store);
        self.metrics.total_rolled_back += 1;
        self.metrics.undo_records_applied += applied as u64;
        tracing::debug!(
            txn_id = id,
            applied,
            depth = self.stack.depth(),
            "transaction rolled back"
        );
        Output::Unit
    }
}

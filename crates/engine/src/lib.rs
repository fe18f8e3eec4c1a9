//! Transactional command engine for simpledb
//!
//! This crate composes the storage layer with nested transactions:
//! - TransactionEngine: single dispatch point for every `Command`
//! - Transaction bookkeeping: undo records, per-transaction logs, the stack
//! - TransactionMetrics: lifecycle counters
//!
//! The engine is the only component that knows about transactions. The
//! `Store` underneath sees plain `set`/`unset` calls, including the ones
//! replayed by a rollback.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod metrics;
pub mod transaction;

pub use engine::TransactionEngine;
pub use metrics::TransactionMetrics;
pub use transaction::{Transaction, TransactionStack, TxnId, UndoRecord};

// Re-export the vocabulary so callers need only this crate
pub use simpledb_core::{Command, Error, Output, Result};
pub use simpledb_storage::Store;

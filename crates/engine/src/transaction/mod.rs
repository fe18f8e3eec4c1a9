//! Transaction bookkeeping
//!
//! This module provides:
//! - UndoRecord: inverse of one mutation, captured when it runs
//! - Transaction: ordered undo log for one `Begin` scope
//! - TransactionStack: nested open transactions, innermost on top

pub mod log;
pub mod stack;
pub mod undo;

pub use log::{Transaction, TxnId};
pub use stack::TransactionStack;
pub use undo::UndoRecord;

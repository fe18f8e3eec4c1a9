//! simpledb - In-memory key-value store with nested transactions
//!
//! simpledb keeps string keys bound to string values, counts how many keys
//! hold each value, and lets callers group mutations into nested
//! transactions that can be rolled back one level at a time or committed
//! all at once.
//!
//! # Quick Start
//!
//! ```
//! use simpledb::{Command, Output, TransactionEngine};
//!
//! let mut db = TransactionEngine::new();
//!
//! db.apply(Command::Set { key: "a".into(), value: "10".into() });
//! db.apply(Command::Begin);
//! db.apply(Command::Unset { key: "a".into() });
//! db.apply(Command::Rollback);
//!
//! assert_eq!(
//!     db.apply(Command::Get { key: "a".into() }),
//!     Output::Maybe(Some("10".into())),
//! );
//! ```
//!
//! # Architecture
//!
//! All operations go through [`TransactionEngine::apply`], which takes a
//! [`Command`] and returns an [`Output`]. Storage internals are reachable
//! read-only through [`TransactionEngine::store`].

pub use simpledb_engine::*;

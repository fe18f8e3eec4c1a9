//! Storage layer for simpledb
//!
//! This crate implements the in-memory backend:
//! - Store: FxHashMap-based key → value storage
//! - ValueIndex: value → count reverse index for O(1) equality counts
//!
//! The store has no notion of transactions. Undo tracking lives in
//! `simpledb-engine`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod store;

pub use index::ValueIndex;
pub use store::Store;

//! Core types for simpledb
//!
//! This crate defines the vocabulary shared by every layer:
//! - Command: the closed instruction set accepted by the engine
//! - Output: the structured result of applying a command
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod error;
pub mod output;

pub use command::Command;
pub use error::{Error, Result};
pub use output::Output;

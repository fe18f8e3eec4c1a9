//! Line-protocol front end for simpledb.
//!
//! Parses `SET`/`GET`/`BEGIN`/... lines into [`Command`]s, applies them to
//! a [`TransactionEngine`] and renders each [`Output`] as text.
//!
//! [`Command`]: simpledb_engine::Command
//! [`Output`]: simpledb_engine::Output
//! [`TransactionEngine`]: simpledb_engine::TransactionEngine

pub mod commands;
pub mod config;
pub mod format;
pub mod logging;
pub mod parse;
pub mod repl;
pub mod session;

pub use config::CliConfig;
pub use format::OutputMode;
pub use parse::{parse_line, Line};
pub use session::{run_session, step, SessionSummary, Step};

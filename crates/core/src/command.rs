//! Command enum defining all simpledb operations.
//!
//! Commands are the "instruction set" of simpledb. Every operation the
//! engine can perform is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Closed**: The operation set is fixed; dispatch is a single `match`
//! - **Pure data**: No closures or executable code

use std::fmt;

use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Data | 4 | `Set`, `Unset`, `Get`, `CountEqualTo` |
/// | Transaction | 3 | `Begin`, `Commit`, `Rollback` |
///
/// Session termination (`END` in the line protocol) is not a command: it
/// never reaches the engine.
///
/// # Example
///
/// ```
/// use simpledb_core::Command;
///
/// let cmd = Command::Set {
///     key: "a".into(),
///     value: "10".into(),
/// };
/// assert!(cmd.is_mutation());
/// assert_eq!(cmd.to_string(), "SET a 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Data (4) ====================
    /// Bind `key` to `value`, replacing any previous value.
    /// Returns: `Output::Unit`
    Set { key: String, value: String },

    /// Remove `key`.
    /// Returns: `Output::Unit`, or `Output::NotFound` if the key was absent
    Unset { key: String },

    /// Look up `key`.
    /// Returns: `Output::Maybe`
    Get { key: String },

    /// Count the keys currently bound to `value`.
    /// Returns: `Output::Count`
    CountEqualTo { value: String },

    // ==================== Transaction (3) ====================
    /// Open a new (possibly nested) transaction.
    /// Returns: `Output::Unit`
    Begin,

    /// Finalize every open transaction.
    /// Returns: `Output::Unit`, or `Output::NoTransaction`
    Commit,

    /// Undo the innermost open transaction.
    /// Returns: `Output::Unit`, or `Output::NoTransaction`
    Rollback,
}

impl Command {
    /// Returns `true` if this command can change the store and therefore
    /// produces an undo record when it takes effect.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Command::Set { .. } | Command::Unset { .. })
    }

    /// Returns `true` for the transaction-control commands.
    pub fn is_transaction_control(&self) -> bool {
        matches!(self, Command::Begin | Command::Commit | Command::Rollback)
    }

    /// Returns the variant name as a static string.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "Set",
            Command::Unset { .. } => "Unset",
            Command::Get { .. } => "Get",
            Command::CountEqualTo { .. } => "CountEqualTo",
            Command::Begin => "Begin",
            Command::Commit => "Commit",
            Command::Rollback => "Rollback",
        }
    }
}

/// Renders the canonical protocol line for the command.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Set { key, value } => write!(f, "SET {} {}", key, value),
            Command::Unset { key } => write!(f, "UNSET {}", key),
            Command::Get { key } => write!(f, "GET {}", key),
            Command::CountEqualTo { value } => write!(f, "NUMEQUALTO {}", value),
            Command::Begin => f.write_str("BEGIN"),
            Command::Commit => f.write_str("COMMIT"),
            Command::Rollback => f.write_str("ROLLBACK"),
        }
    }
}

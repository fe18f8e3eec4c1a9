//! Output enum for command execution results.
//!
//! Every command produces exactly one output. The mapping from command to
//! the set of possible outputs is fixed:
//!
//! | Command | Outputs |
//! |---------|---------|
//! | `Set` | `Unit` |
//! | `Unset` | `Unit`, `NotFound` |
//! | `Get` | `Maybe` |
//! | `CountEqualTo` | `Count` |
//! | `Begin` | `Unit` |
//! | `Commit` / `Rollback` | `Unit`, `NoTransaction` |

use serde::{Deserialize, Serialize};

/// Result of applying a [`Command`](crate::Command).
///
/// None of these are failures. `NotFound` and `NoTransaction` are expected
/// outcomes the caller branches on; neither changes any state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Acknowledged, no return value
    Unit,

    /// `Unset` targeted a key that does not exist
    NotFound,

    /// Optional value (for `Get`)
    Maybe(Option<String>),

    /// Number of keys holding a value (for `CountEqualTo`)
    Count(u64),

    /// `Commit` or `Rollback` issued with no open transaction
    NoTransaction,
}

//! Error types for simpledb.
//!
//! The engine itself has no fatal errors: every command is total over its
//! input. `Error` covers the store-level "absent key" condition (which the
//! engine turns into `Output::NotFound`) and the failures of the layers
//! around the engine (script files, configuration, output streams).

use serde::{Deserialize, Serialize};

/// Result type alias for simpledb operations
pub type Result<T> = std::result::Result<T, Error>;

/// simpledb errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Not Found | `KeyNotFound` | Key doesn't exist |
/// | System | `Io`, `Config` | Infrastructure errors |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// Key not found in the store
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    // ==================== System Errors ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Configuration could not be read or parsed
    #[error("config error: {reason}")]
    Config { reason: String },
}

impl Error {
    /// Create a `KeyNotFound` error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound { key: key.into() }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}

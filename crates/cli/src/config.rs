//! CLI configuration via `simpledb.toml`
//!
//! Settings are read from the file named by `--config`, or from
//! `simpledb.toml` in the working directory when present. Command-line
//! flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use simpledb_engine::{Error, Result};

use crate::format::OutputMode;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "simpledb.toml";

/// CLI configuration loaded from `simpledb.toml`.
///
/// # Example
///
/// ```toml
/// # Output mode: "transcript" (default), "raw" or "json"
/// output = "transcript"
///
/// # Log filter when SIMPLEDB_LOG is unset
/// log_level = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output mode: `"transcript"`, `"raw"` or `"json"`.
    #[serde(default = "default_output")]
    pub output: String,
    /// `tracing` filter directive used when `SIMPLEDB_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// REPL history file. History is kept in memory only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,
    /// REPL prompt prefix.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_output() -> String {
    "transcript".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    "simpledb".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            log_level: default_log_level(),
            history_file: None,
            prompt: default_prompt(),
        }
    }
}

impl CliConfig {
    /// Parse the output string into an `OutputMode`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the string is not a known mode.
    pub fn output_mode(&self) -> Result<OutputMode> {
        self.output.parse()
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# simpledb configuration
#
# Output mode: "transcript" (default), "raw" or "json"
#   "transcript" = echo each command, results as "> value"
#   "raw"        = bare result lines only
#   "json"       = one JSON object per command
output = "transcript"

# Log filter used when SIMPLEDB_LOG is unset (default: "warn")
log_level = "warn"

# REPL prompt prefix
prompt = "simpledb"

# REPL history file (optional)
# history_file = ".simpledb_history"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown output mode.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config: CliConfig = toml::from_str(&content).map_err(|e| Error::Config {
            reason: format!("failed to parse config file '{}': {}", path.display(), e),
        })?;
        // Validate the output mode eagerly
        config.output_mode()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `simpledb.toml` in `dir` is
    /// used if present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = dir.join(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

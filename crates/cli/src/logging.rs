//! Log subscriber setup.
//!
//! Logs go to stderr so stdout carries only the protocol output.

use tracing_subscriber::EnvFilter;

use simpledb_engine::{Error, Result};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SIMPLEDB_LOG";

/// Build the filter: `SIMPLEDB_LOG` wins, otherwise `default_level`.
pub fn filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| Error::Config {
            reason: format!("invalid log filter '{}': {}", default_level, e),
        }),
    }
}

/// Install the global `tracing` subscriber.
///
/// # Errors
///
/// Returns `Error::Config` if the filter is invalid or a subscriber is
/// already installed.
pub fn init(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Config {
            reason: format!("failed to install log subscriber: {}", e),
        })
}

//! Command/Output → text formatting.
//!
//! Three modes:
//! - **Transcript** (default): echoes each command as its protocol line,
//!   then results as `> 10`, `> NULL`, `> 2`, `> NO TRANSACTION`
//! - **Raw** (`--raw`): result lines only, no echo, no `> ` prefix
//! - **JSON** (`--json`): one compact object per command,
//!   `{"command": …, "output": …}`
//!
//! Acknowledgements (`Unit`) and `NotFound` produce no result line in the
//! text modes.

use std::fmt;
use std::str::FromStr;

use simpledb_engine::{Command, Error, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Transcript,
    Raw,
    Json,
}

impl FromStr for OutputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transcript" => Ok(OutputMode::Transcript),
            "raw" => Ok(OutputMode::Raw),
            "json" => Ok(OutputMode::Json),
            other => Err(Error::Config {
                reason: format!(
                    "invalid output mode '{}'. Expected \"transcript\", \"raw\" or \"json\"",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Transcript => "transcript",
            OutputMode::Raw => "raw",
            OutputMode::Json => "json",
        })
    }
}

/// Format the lines printed for one applied command.
pub fn format_result(cmd: &Command, output: &Output, mode: OutputMode) -> Vec<String> {
    match mode {
        OutputMode::Json => vec![serde_json::json!({
            "command": cmd,
            "output": output,
        })
        .to_string()],
        OutputMode::Transcript => {
            let mut lines = vec![cmd.to_string()];
            if let Some(value) = format_value(output) {
                lines.push(format!("> {}", value));
            }
            lines
        }
        OutputMode::Raw => format_value(output).into_iter().collect(),
    }
}

/// Format the line printed when the session ends, if any.
pub fn format_end(mode: OutputMode) -> Option<String> {
    match mode {
        OutputMode::Transcript => Some("END".to_string()),
        OutputMode::Raw | OutputMode::Json => None,
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({ "error": err.to_string() }).to_string(),
        OutputMode::Raw | OutputMode::Transcript => format!("(error) {}", err),
    }
}

/// Bare rendering of an output, or `None` when nothing is printed.
fn format_value(output: &Output) -> Option<String> {
    match output {
        Output::Unit | Output::NotFound => None,
        Output::Maybe(Some(value)) => Some(value.clone()),
        Output::Maybe(None) => Some("NULL".to_string()),
        Output::Count(n) => Some(n.to_string()),
        Output::NoTransaction => Some("NO TRANSACTION".to_string()),
    }
}

//! Line-driven session over a [`TransactionEngine`].
//!
//! Reads protocol lines, applies the commands they carry and writes the
//! formatted results. Used by pipe mode, script mode and (one line at a
//! time) by the interactive REPL.

use std::io::{BufRead, Write};

use simpledb_engine::{Result, TransactionEngine};

use crate::format::{format_end, format_result, OutputMode};
use crate::parse::{parse_line, Line};

/// What happened to a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A command was applied to the engine.
    Applied,
    /// The line was blank.
    Blank,
    /// The line was malformed or unrecognized and was dropped.
    Dropped,
    /// The line was `END`.
    End,
}

/// Counters for a completed session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands applied to the engine
    pub applied: usize,
    /// Non-blank lines that were dropped
    pub dropped: usize,
    /// Whether the session was terminated by `END` (as opposed to EOF)
    pub ended: bool,
}

/// Process one input line: parse, apply, write the formatted result.
pub fn step<W: Write>(
    engine: &mut TransactionEngine,
    line: &str,
    out: &mut W,
    mode: OutputMode,
) -> Result<Step> {
    if line.trim().is_empty() {
        return Ok(Step::Blank);
    }

    match parse_line(line) {
        None => {
            tracing::debug!(line, "dropped line");
            Ok(Step::Dropped)
        }
        Some(Line::End) => {
            if let Some(end) = format_end(mode) {
                writeln!(out, "{}", end)?;
            }
            Ok(Step::End)
        }
        Some(Line::Command(cmd)) => {
            // Render the echo before `apply` consumes the command
            let echo = cmd.clone();
            let output = engine.apply(cmd);
            for text in format_result(&echo, &output, mode) {
                writeln!(out, "{}", text)?;
            }
            Ok(Step::Applied)
        }
    }
}

/// Run a session until `END` or end of input.
///
/// # Errors
///
/// Returns `Error::Io` if reading the input or writing the output fails.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut TransactionEngine,
    input: R,
    out: &mut W,
    mode: OutputMode,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for line in input.lines() {
        match step(engine, &line?, out, mode)? {
            Step::Applied => summary.applied += 1,
            Step::Dropped => summary.dropped += 1,
            Step::Blank => {}
            Step::End => {
                summary.ended = true;
                break;
            }
        }
    }
    out.flush()?;

    tracing::debug!(
        applied = summary.applied,
        dropped = summary.dropped,
        ended = summary.ended,
        open_transactions = engine.depth(),
        "session finished"
    );
    Ok(summary)
}

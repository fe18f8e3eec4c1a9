//! Protocol line → Command conversion.
//!
//! The line protocol is keyword-prefixed and whitespace-separated:
//!
//! | Line | Result |
//! |------|--------|
//! | `SET <key> <value>` | `Command::Set` |
//! | `UNSET <key>` | `Command::Unset` |
//! | `GET <key>` | `Command::Get` |
//! | `NUMEQUALTO <value>` | `Command::CountEqualTo` |
//! | `BEGIN` / `ROLLBACK` / `COMMIT` | transaction commands |
//! | `END` | `Line::End` (session termination) |
//!
//! Keywords are matched case-sensitively against the start of the line, in
//! the order above, so `SETX a 1` reads as `SET`. The first token is always
//! the keyword; arguments are the tokens after it and extra trailing tokens
//! are ignored. Lines missing a required argument, blank lines and lines
//! with no known keyword are dropped.

use simpledb_engine::Command;

/// The result of parsing one protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A command to apply to the engine.
    Command(Command),
    /// End of session. Never forwarded to the engine.
    End,
}

/// Parse a single protocol line.
///
/// Returns `None` for lines that must be silently dropped.
pub fn parse_line(line: &str) -> Option<Line> {
    let mut args = line.split_whitespace().skip(1);

    let cmd = if line.starts_with("SET") {
        let key = args.next()?;
        let value = args.next()?;
        Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    } else if line.starts_with("UNSET") {
        Command::Unset {
            key: args.next()?.to_string(),
        }
    } else if line.starts_with("GET") {
        Command::Get {
            key: args.next()?.to_string(),
        }
    } else if line.starts_with("NUMEQUALTO") {
        Command::CountEqualTo {
            value: args.next()?.to_string(),
        }
    } else if line.starts_with("BEGIN") {
        Command::Begin
    } else if line.starts_with("ROLLBACK") {
        Command::Rollback
    } else if line.starts_with("COMMIT") {
        Command::Commit
    } else if line.starts_with("END") {
        return Some(Line::End);
    } else {
        return None;
    };

    Some(Line::Command(cmd))
}

//! Interactive REPL with rustyline.
//!
//! Each line goes through the same [`step`] as pipe mode. The prompt
//! shows the open transaction depth: `simpledb> `, `simpledb(2)> `.

use std::io;
use std::path::Path;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use simpledb_engine::{Error, Result, TransactionEngine};

use crate::format::OutputMode;
use crate::session::{step, Step};

/// Protocol keywords offered by TAB completion.
const KEYWORDS: &[&str] = &[
    "SET",
    "UNSET",
    "GET",
    "NUMEQUALTO",
    "BEGIN",
    "ROLLBACK",
    "COMMIT",
    "END",
];

/// Render the prompt for the given transaction depth.
pub fn prompt(prefix: &str, depth: usize) -> String {
    if depth == 0 {
        format!("{}> ", prefix)
    } else {
        format!("{}({})> ", prefix, depth)
    }
}

/// Run the interactive REPL until `END`, Ctrl-D or a terminal error.
pub fn run_repl(
    engine: &mut TransactionEngine,
    mode: OutputMode,
    prompt_prefix: &str,
    history: Option<&Path>,
) -> Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<KeywordHelper, _> = Editor::with_config(config).map_err(readline_error)?;
    rl.set_helper(Some(KeywordHelper));

    if let Some(path) = history {
        // A missing history file is normal on first run
        if let Err(e) = rl.load_history(path) {
            tracing::debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    let stdout = io::stdout();
    loop {
        match rl.readline(&prompt(prompt_prefix, engine.depth())) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                let mut out = stdout.lock();
                match step(engine, &line, &mut out, mode)? {
                    Step::End => break,
                    Step::Dropped => eprintln!("(error) unrecognized command: {}", line.trim()),
                    Step::Applied | Step::Blank => {}
                }
            }
            // Ctrl-C: fresh prompt
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(readline_error(e)),
        }
    }

    if let Some(path) = history {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
    Ok(())
}

fn readline_error(e: ReadlineError) -> Error {
    Error::Io {
        reason: format!("line editor: {}", e),
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

struct KeywordHelper;

impl Helper for KeywordHelper {}
impl Validator for KeywordHelper {}
impl Highlighter for KeywordHelper {}
impl Hinter for KeywordHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for KeywordHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_keyword(&line[..pos]))
    }
}

/// Keyword candidates for the text before the cursor. Only the first word
/// is completed.
fn complete_keyword(line_to_pos: &str) -> (usize, Vec<Pair>) {
    let pos = line_to_pos.len();
    if line_to_pos.contains(char::is_whitespace) {
        return (pos, vec![]);
    }

    let candidates = KEYWORDS
        .iter()
        .filter(|kw| kw.starts_with(&line_to_pos.to_ascii_uppercase()))
        .map(|kw| Pair {
            display: kw.to_string(),
            replacement: kw.to_string(),
        })
        .collect();
    (0, candidates)
}

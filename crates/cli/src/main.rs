//! simpledb - in-memory key-value store driven by a line protocol.
//!
//! Three modes:
//! - **Script mode**: `simpledb --file script.txt`
//! - **Pipe mode**: `printf 'SET a 10\nGET a\n' | simpledb`
//! - **REPL mode**: `simpledb` with a TTY on stdin

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::ArgMatches;

use simpledb_cli::commands::build_cli;
use simpledb_cli::config::CliConfig;
use simpledb_cli::format::{format_error, OutputMode};
use simpledb_cli::session::run_session;
use simpledb_cli::{logging, repl};
use simpledb_engine::{Error, Result, TransactionEngine};

fn main() {
    let matches = build_cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e, OutputMode::Transcript));
            process::exit(1);
        }
    };

    let mode = match output_mode(&matches, &config) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", format_error(&e, OutputMode::Transcript));
            process::exit(1);
        }
    };

    if let Err(e) = run(&matches, &config, mode) {
        eprintln!("{}", format_error(&e, mode));
        process::exit(1);
    }
}

fn run(matches: &ArgMatches, config: &CliConfig, mode: OutputMode) -> Result<()> {
    let log_level = matches
        .get_one::<String>("log-level")
        .unwrap_or(&config.log_level);
    logging::init(log_level)?;

    let mut engine = TransactionEngine::new();

    if let Some(path) = matches.get_one::<String>("file") {
        run_script(&mut engine, Path::new(path), mode)
    } else if io::stdin().is_terminal() {
        repl::run_repl(
            &mut engine,
            mode,
            &config.prompt,
            config.history_file.as_deref(),
        )
    } else {
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        run_session(&mut engine, stdin.lock(), &mut stdout, mode).map(|_| ())
    }
}

fn run_script(engine: &mut TransactionEngine, path: &Path, mode: OutputMode) -> Result<()> {
    let file = File::open(path).map_err(|e| Error::Io {
        reason: format!("failed to open script '{}': {}", path.display(), e),
    })?;
    let mut stdout = io::stdout().lock();
    let summary = run_session(engine, BufReader::new(file), &mut stdout, mode)?;
    tracing::info!(
        script = %path.display(),
        applied = summary.applied,
        dropped = summary.dropped,
        "script finished"
    );
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<CliConfig> {
    let explicit = matches.get_one::<String>("config").map(PathBuf::from);
    let cwd = std::env::current_dir()?;
    CliConfig::load(explicit.as_deref(), &cwd)
}

/// Flags override the config file.
fn output_mode(matches: &ArgMatches, config: &CliConfig) -> Result<OutputMode> {
    if matches.get_flag("json") {
        Ok(OutputMode::Json)
    } else if matches.get_flag("raw") {
        Ok(OutputMode::Raw)
    } else {
        config.output_mode()
    }
}

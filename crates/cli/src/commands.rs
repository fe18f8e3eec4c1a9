//! Clap command definition.
//!
//! The protocol itself is read from stdin, a script file or the REPL;
//! the command line only carries session options.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("simpledb")
        .about("In-memory key-value store with nested transactions")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .help("Run commands from a script file instead of stdin"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file (default: ./simpledb.toml if present)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (no command echo, no '> ' prefix)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .help("Log filter when SIMPLEDB_LOG is unset (default: warn)"),
        )
}

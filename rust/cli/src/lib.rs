//! # holdem CLI
//!
//! Terminal front end for the six-seat table engine.
//!
//! The entry point is [`run`], which parses arguments, dispatches to a
//! subcommand, and returns the process exit code. Output streams are passed
//! in, so the whole CLI can be driven from tests.
//!
//! ```no_run
//! use std::io;
//! let code = holdem_cli::run(
//!     ["holdem", "sim", "--hands", "100", "--seed", "7"],
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `play`: one human seat against computer opponents, actions typed on stdin
//! - `sim`: computer seats only, with optional JSONL hand histories
//! - `cfg`: resolved configuration and the source of every value

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_play_command, handle_sim_command,
};

pub use commands::HumanProvider;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Runs the CLI and returns the exit code: `0` on success, `2` on any error,
/// `130` when input closes in the middle of a `play` session.
///
/// ```
/// use std::io;
/// let mut out = Vec::new();
/// let code = holdem_cli::run(["holdem", "sim", "--hands", "3", "--seed", "1"], &mut out, &mut io::sink());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Simulated: 3 hands"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    run_with_input(args, &mut stdin.lock(), out, err)
}

/// Same as [`run`], reading `play` actions from `input` instead of stdin.
///
/// ```
/// use std::io::{self, Cursor};
/// let mut out = Vec::new();
/// let code = holdem_cli::run_with_input(
///     ["holdem", "play", "--seed", "3"],
///     &mut Cursor::new("q\n"),
///     &mut out,
///     &mut io::sink(),
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            hands,
            seed,
            name,
            seat,
            players,
            ai,
        } => {
            let opts = PlayOptions {
                hands,
                seed,
                name,
                seat,
                players: players as usize,
                opponent: ai.kind(),
            };
            handle_play_command(opts, out, err, input)
        }
        Commands::Sim {
            hands,
            seed,
            output,
            players,
            ai,
        } => {
            let opts = SimOptions {
                hands,
                seed,
                output,
                players: players as usize,
                opponent: ai.kind(),
            };
            handle_sim_command(opts, out, err)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = ui::display_warning(err, &format!("interrupted: {}", msg));
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed.
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = write_usage(&e, err);
    exit_code::ERROR
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Usage: holdem <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: holdem --help")
}

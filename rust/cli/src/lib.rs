//! # Make Ten CLI Library
//!
//! Command-line front end for the Make Ten matching game: play a round on the
//! terminal, let pickers simulate rounds, and aggregate recorded results.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand handler, returning the process exit code.
//!
//! ## Available Subcommands
//!
//! - `play`: Play a round interactively on stdin
//! - `sim`: Let a picker play many rounds and write JSONL round records
//! - `stats`: Aggregate round records from a file or directory
//! - `deal`: Show the face-up layout of a shuffled deck
//! - `cfg`: Display resolved configuration and value sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, MakeTenCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "stats", "deal", "cfg"];

/// Parses `args` and runs the chosen subcommand.
///
/// Returns `0` on success and `2` on any error. Help and version go to `out`
/// and return `0`.
///
/// ```
/// use std::io;
/// let args = vec!["maketen", "deal", "--seed", "42"];
/// let code = maketen_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match MakeTenCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Make Ten CLI");
                    write_or_exit!(err, "Usage: maketen <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: maketen --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            no_delay,
            record,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(seed, no_delay, record, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            rounds,
            picker,
            seed,
            output,
        } => handle_sim_command(rounds, picker, seed, output, out),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

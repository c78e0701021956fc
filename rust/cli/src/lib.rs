//! # Hexgames CLI Library
//!
//! Command-line front end for the Dvonn, Gipf and Tzaar rules engine.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand with injected output streams, so tests can drive it directly.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["hexgames", "sim", "--game", "tzaar", "--games", "3"];
//! let code = hexgames_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `new`: print the initial state of a game as JSON
//! - `play`: play on stdin, optionally against a computer opponent
//! - `step`: apply inputs to a saved JSON state
//! - `sim`: computer-vs-computer games with rule checks
//! - `cfg`: show the resolved configuration

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
pub mod ui;
pub mod validation;

use cli::{Commands, HexgamesCli};
use commands::{
    handle_cfg_command, handle_new_command, handle_play_command, handle_sim_command,
    handle_step_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["new", "play", "step", "sim", "cfg"];

/// Parses `args` and runs the chosen subcommand.
///
/// Returns [`exit_code::SUCCESS`], or [`exit_code::ERROR`] after printing the
/// error to `err`.
///
/// ```
/// use std::io;
/// let mut out = Vec::new();
/// let code = hexgames_cli::run(["hexgames", "new", "--game", "dvonn"], &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("\"gameType\": \"dvonn\""));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HexgamesCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    let result = match cli.cmd {
        Commands::New {
            game,
            setup,
            seed,
            name,
            id,
        } => handle_new_command(game, setup, seed, name, id, out),
        Commands::Play {
            game,
            setup,
            seed,
            vs,
            ai,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(game, setup, seed, vs, &ai, out, err, &mut stdin_lock)
        }
        Commands::Step {
            state,
            clicks,
            output,
        } => handle_step_command(&state, &clicks, output.as_deref(), out, err),
        Commands::Sim {
            game,
            setup,
            games,
            seed,
            max_clicks,
            ai,
        } => handle_sim_command(game, setup, games, seed, max_clicks, &ai, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut usage = format!(
        "{}\nHexgames CLI\nUsage: hexgames <command> [options]\n\nCommands:\n",
        e
    );
    for c in COMMANDS {
        usage.push_str(&format!("  {}\n", c));
    }
    usage.push_str("\nFor full help, run: hexgames --help");
    let _ = writeln!(err, "{}", usage);
    exit_code::ERROR
}

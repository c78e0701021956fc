//! Command-line surface of the `hexgames` binary.

use clap::{Parser, Subcommand, ValueEnum};
use hexgames_engine::game::GameType;

#[derive(Parser, Debug)]
#[command(
    name = "hexgames",
    version,
    about = "Rules engine for the Dvonn, Gipf and Tzaar board games"
)]
pub struct HexgamesCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a game and print its initial state as JSON
    New {
        #[arg(long)]
        game: Option<GameType>,
        #[arg(long)]
        setup: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Game name, defaults to the creation time
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        id: Option<String>,
    },
    /// Play interactively on stdin
    Play {
        #[arg(long)]
        game: Option<GameType>,
        #[arg(long)]
        setup: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Vs::Human)]
        vs: Vs,
        /// Opponent kind used with `--vs ai`
        #[arg(long, default_value = "random")]
        ai: String,
    },
    /// Apply inputs to a saved state and print the result
    Step {
        /// JSON state file written by `new`, `step` or the `state` play command
        #[arg(long)]
        state: String,
        /// A cell as `x,y,z`, or `pass`
        #[arg(long = "click", allow_hyphen_values = true)]
        clicks: Vec<String>,
        /// Write the resulting state here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
    /// Play computer-vs-computer games and check rule invariants
    Sim {
        #[arg(long)]
        game: Option<GameType>,
        #[arg(long)]
        setup: Option<String>,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        max_clicks: Option<u32>,
        #[arg(long, default_value = "random")]
        ai: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Who controls the black seat in `play`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    Human,
    Ai,
}

impl Vs {
    /// # Examples
    ///
    /// ```
    /// # use hexgames_cli::cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}

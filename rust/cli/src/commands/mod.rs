//! Command handlers, one module per subcommand.
//!
//! Every handler takes its parsed flags plus the output streams and returns
//! `Result<(), CliError>`; [`crate::run`] turns errors into exit codes.

mod cfg;
mod new;
mod play;
mod sim;
mod step;

pub use cfg::handle_cfg_command;
pub use new::handle_new_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use step::handle_step_command;

use hexgames_engine::engine::DEFAULT_SETUP;
use hexgames_engine::game::GameType;
use hexgames_engine::options::GameOptions;

use crate::config::{self, Config};
use crate::error::CliError;

/// Loads the configuration and lays command-line flags over it.
///
/// Switching `--game` without `--setup` falls back to the standard setup when
/// the configured one does not exist for the new game.
pub(crate) fn resolve_settings(
    game: Option<GameType>,
    setup: Option<String>,
    seed: Option<u64>,
) -> Result<Config, CliError> {
    let mut cfg = config::load()?;
    if let Some(game) = game {
        if setup.is_none() && !config::is_known_setup(game, &cfg.setup) {
            cfg.setup = DEFAULT_SETUP.to_string();
        }
        cfg.game = game;
    }
    if let Some(setup) = setup {
        cfg.setup = setup;
    }
    if seed.is_some() {
        cfg.seed = seed;
    }
    if !config::is_known_setup(cfg.game, &cfg.setup) {
        return Err(CliError::InvalidInput(format!(
            "{} has no setup '{}' (expected one of {})",
            cfg.game,
            cfg.setup,
            hexgames_engine::engine::Game::setups(cfg.game).join(", ")
        )));
    }
    Ok(cfg)
}

pub(crate) fn game_options(cfg: &Config) -> GameOptions {
    let [white, black] = cfg.player_names.clone();
    let options = GameOptions::default().with_names(white, black);
    match cfg.seed {
        Some(seed) => options.with_seed(seed),
        None => options,
    }
}

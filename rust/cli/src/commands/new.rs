//! `new`: creates a game and prints its initial state as pretty JSON.

use std::io::Write;

use hexgames_engine::engine::Game;
use hexgames_engine::game::GameType;
use tracing::info;

use super::{game_options, resolve_settings};
use crate::error::CliError;

pub fn handle_new_command(
    game: Option<GameType>,
    setup: Option<String>,
    seed: Option<u64>,
    name: Option<String>,
    id: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_settings(game, setup, seed)?;
    let mut options = game_options(&cfg);
    options.game_name = name;
    options.game_id = id;

    let game = Game::new(cfg.game, &cfg.setup, &options)?;
    info!(game_type = %cfg.game, setup = %cfg.setup, "created game");
    writeln!(out, "{}", serde_json::to_string_pretty(&game.export_json()?)?)?;
    Ok(())
}

//! `step`: loads a saved state, applies inputs in order and writes the
//! resulting state.
//!
//! Any input the game rejects aborts the command without writing anything,
//! so a state file is never replaced by a partially applied sequence.

use std::io::Write;
use std::path::Path;

use hexgames_engine::engine::Game;
use tracing::debug;

use crate::error::CliError;
use crate::formatters::format_input;
use crate::io_utils::{ensure_parent_dir, read_text};
use crate::validation::parse_input;

pub fn handle_step_command(
    state: &str,
    clicks: &[String],
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = read_text(state).map_err(CliError::InvalidInput)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let mut game = Game::from_json(value)?;

    for (index, raw) in clicks.iter().enumerate() {
        let input = parse_input(raw).map_err(CliError::InvalidInput)?;
        let described = format_input(&game, &input);
        if !game.apply(input) {
            return Err(CliError::InvalidInput(format!(
                "input {} ({}) was rejected in step {:?}",
                index + 1,
                described,
                game.step()
            )));
        }
        debug!(input = %described, "applied input");
    }

    if game.is_completed() {
        writeln!(err, "{}", crate::formatters::format_outcome(game.winner()))?;
    }

    let json = serde_json::to_string_pretty(&game.export_json()?)?;
    match output {
        Some(path) => {
            let path = Path::new(path);
            ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
            std::fs::write(path, format!("{}\n", json))?;
        }
        None => writeln!(out, "{}", json)?,
    }
    Ok(())
}

//! # Play Command
//!
//! Interactive play on stdin. Each line is one input:
//!
//! - `x,y,z` (or `x y z`) clicks a cell
//! - `pass` declines a Tzaar second action or the remaining GIPF claims
//! - `board` redraws the board, `state` prints the JSON state
//! - `q` or end of input leaves the session
//!
//! With `--vs ai` the black seat is played by a computer opponent.

use crate::cli::Vs;
use crate::error::CliError;
use crate::formatters::{format_board, format_input, format_outcome, format_prompt};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_play_input};
use hexgames_ai::{OPPONENT_KINDS, Opponent, create_opponent};
use hexgames_engine::engine::Game;
use hexgames_engine::game::GameType;
use hexgames_engine::player::Side;
use std::io::{BufRead, Write};
use tracing::info;

use super::{game_options, resolve_settings};

/// Handle the play command.
///
/// # Arguments
///
/// * `game`, `setup`, `seed` - Override the configured values
/// * `vs` - Who plays black
/// * `ai_kind` - Opponent kind when `vs` is [`Vs::Ai`]
/// * `out` - Board, prompts and log lines
/// * `err` - Rejected inputs
/// * `stdin` - One input per line
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    game: Option<GameType>,
    setup: Option<String>,
    seed: Option<u64>,
    vs: Vs,
    ai_kind: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut cfg = resolve_settings(game, setup, seed)?;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    cfg.seed = Some(seed);

    let mut opponent: Option<Box<dyn Opponent>> = match vs {
        Vs::Human => None,
        Vs::Ai => Some(create_opponent(ai_kind, seed).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "unknown opponent '{}' (expected one of {})",
                ai_kind,
                OPPONENT_KINDS.join(", ")
            ))
        })?),
    };

    let mut game = Game::new(cfg.game, &cfg.setup, &game_options(&cfg))?;
    writeln!(
        out,
        "play: game={} setup={} vs={} seed={}",
        cfg.game,
        cfg.setup,
        vs.as_str(),
        seed
    )?;
    let mut shown = 0;
    echo_log(&game, &mut shown, out)?;
    write!(out, "{}", format_board(&game))?;

    loop {
        if game.is_completed() {
            writeln!(out, "{}", format_outcome(game.winner()))?;
            break;
        }

        if let Some(ai) = opponent.as_mut()
            && game.current_player().side == Side::Black
        {
            let input = ai.choose_input(&game).ok_or_else(|| {
                CliError::Engine(format!("{} found no input to play", ai.name()))
            })?;
            let described = format_input(&game, &input);
            if !game.apply(input) {
                return Err(CliError::Engine(format!(
                    "{} chose a rejected input {}",
                    ai.name(),
                    described
                )));
            }
            writeln!(out, "{} plays {}", ai.name(), described)?;
            echo_log(&game, &mut shown, out)?;
            write!(out, "{}", format_board(&game))?;
            continue;
        }

        writeln!(out, "{}", format_prompt(&game))?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out, "Input closed.")?;
            break;
        };
        match parse_play_input(&line) {
            ParseResult::Quit => {
                writeln!(out, "Quit.")?;
                break;
            }
            ParseResult::State => {
                writeln!(out, "{}", serde_json::to_string_pretty(&game.export_json()?)?)?;
            }
            ParseResult::Board => write!(out, "{}", format_board(&game))?,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Input(input) => {
                let described = format_input(&game, &input);
                if game.apply(input) {
                    echo_log(&game, &mut shown, out)?;
                    write!(out, "{}", format_board(&game))?;
                } else {
                    ui::write_error(err, &format!("{} is not playable now", described))?;
                }
            }
        }
    }

    info!(game_type = %cfg.game, completed = game.is_completed(), "play session ended");
    Ok(())
}

/// Writes log entries added since the last call.
fn echo_log(game: &Game, shown: &mut usize, out: &mut dyn Write) -> Result<(), CliError> {
    for entry in game.log().iter().skip(*shown) {
        writeln!(out, "* {}", entry.message)?;
    }
    *shown = game.log().len();
    Ok(())
}

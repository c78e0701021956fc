//! `sim`: computer-vs-computer games with rule checks after every input.
//!
//! Each game gets its own seed drawn from the base seed, so a run is
//! reproducible and any single game can be replayed with `play`/`new`.
//! After every input the piece totals are checked:
//!
//! - Dvonn: stack heights plus cleared pieces stay at 49 once play starts
//! - Tzaar: stack heights plus captured pieces stay at 60
//! - Gipf: pieces on the board (GIPF pieces count double) plus reserves never grow

use std::io::Write;

use chrono::Utc;
use hexgames_ai::{OPPONENT_KINDS, Opponent, create_opponent};
use hexgames_engine::dvonn::TOTAL_PIECES as DVONN_PIECES;
use hexgames_engine::engine::Game;
use hexgames_engine::game::{GameState, GameType, HexGame};
use hexgames_engine::gipf::{GIPF_PIECE_VALUE, GipfGame};
use hexgames_engine::player::Side;
use hexgames_engine::tzaar::TOTAL_PIECES as TZAAR_PIECES;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use super::{game_options, resolve_settings};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_outcome;
use crate::ui;

#[derive(Debug, Default)]
struct Tally {
    wins: [u32; 2],
    even: u32,
    unfinished: u32,
    clicks: u64,
}

/// Handle the sim command.
///
/// Fails with [`CliError::Engine`] as soon as a game breaks a piece total or
/// an opponent is left without a playable input.
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    game: Option<GameType>,
    setup: Option<String>,
    games: u32,
    seed: Option<u64>,
    max_clicks: Option<u32>,
    ai_kind: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_settings(game, setup, seed)?;
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let max_clicks = max_clicks.unwrap_or(cfg.max_clicks);
    if max_clicks == 0 {
        return Err(CliError::InvalidInput("max-clicks must be >= 1".to_string()));
    }
    if !OPPONENT_KINDS.iter().any(|k| k.eq_ignore_ascii_case(ai_kind)) {
        return Err(CliError::InvalidInput(format!(
            "unknown opponent '{}' (expected one of {})",
            ai_kind,
            OPPONENT_KINDS.join(", ")
        )));
    }

    let base_seed = cfg.seed.unwrap_or_else(rand::random);
    let mut seeds = ChaCha20Rng::seed_from_u64(base_seed);
    writeln!(
        out,
        "sim: game={} setup={} games={} ai={} seed={}",
        cfg.game, cfg.setup, games, ai_kind, base_seed
    )?;

    let mut tally = Tally::default();
    for i in 1..=games {
        let game_seed = seeds.next_u64();
        let (game, clicks) = play_one(&cfg, game_seed, ai_kind, max_clicks)?;
        tally.clicks += u64::from(clicks);
        match game.winner().map(|w| w.side()) {
            Some(Some(side)) => tally.wins[side.index()] += 1,
            Some(None) => tally.even += 1,
            None => tally.unfinished += 1,
        }
        writeln!(
            out,
            "game {}: seed={} clicks={} {}",
            i,
            game_seed,
            clicks,
            format_outcome(game.winner())
        )?;
    }

    writeln!(
        out,
        "summary: white={} black={} even={} unfinished={} clicks={} finished_at={}",
        tally.wins[Side::White.index()],
        tally.wins[Side::Black.index()],
        tally.even,
        tally.unfinished,
        tally.clicks,
        Utc::now().to_rfc3339()
    )?;
    if tally.unfinished > 0 {
        ui::display_warning(
            err,
            &format!(
                "{} game(s) reached the limit of {} clicks",
                tally.unfinished, max_clicks
            ),
        )?;
    }
    info!(games, clicks = tally.clicks, "simulation finished");
    Ok(())
}

fn play_one(
    cfg: &Config,
    seed: u64,
    ai_kind: &str,
    max_clicks: u32,
) -> Result<(Game, u32), CliError> {
    let mut options = game_options(cfg);
    options.seed = Some(seed);
    let mut game = Game::new(cfg.game, &cfg.setup, &options)?;
    let mut seats: Vec<Box<dyn Opponent>> = [seed, seed.wrapping_add(1)]
        .into_iter()
        .map(|s| {
            create_opponent(ai_kind, s)
                .ok_or_else(|| CliError::InvalidInput(format!("unknown opponent '{}'", ai_kind)))
        })
        .collect::<Result<_, _>>()?;
    let gipf_limit = match &game {
        Game::Gipf(g) => Some(gipf_weighted_total(g)),
        _ => None,
    };

    let mut clicks = 0;
    while clicks < max_clicks && !game.is_completed() {
        let seat = game.current_player().side.index();
        let input = seats[seat].choose_input(&game).ok_or_else(|| {
            CliError::Engine(format!(
                "seed {}: no input offered after {} clicks",
                seed, clicks
            ))
        })?;
        if !game.apply(input) {
            return Err(CliError::Engine(format!(
                "seed {}: offered input {:?} was rejected",
                seed, input
            )));
        }
        clicks += 1;
        check_piece_totals(&game, gipf_limit)
            .map_err(|msg| CliError::Engine(format!("seed {}: {}", seed, msg)))?;
    }
    debug!(seed, clicks, completed = game.is_completed(), "simulated game");
    Ok((game, clicks))
}

fn gipf_weighted_total(game: &GipfGame) -> u32 {
    let on_board: u32 = game
        .core()
        .board
        .values()
        .filter(|p| !p.value.is_empty())
        .map(|p| if p.is_gipf_piece { GIPF_PIECE_VALUE } else { 1 })
        .sum();
    let left = game.pieces_left();
    on_board + left.white + left.black
}

fn check_piece_totals(game: &Game, gipf_limit: Option<u32>) -> Result<(), String> {
    match game {
        Game::Dvonn(g) if game.state() != GameState::Setup => {
            let heights: u32 = g.core().board.values().map(|p| p.stack_count).sum();
            let total = heights + g.cleared().iter().sum::<u32>();
            if total != DVONN_PIECES {
                return Err(format!("Dvonn holds {} pieces instead of {}", total, DVONN_PIECES));
            }
        }
        Game::Dvonn(_) => {}
        Game::Tzaar(g) => {
            let heights: u32 = g.core().board.values().map(|p| p.stack_count).sum();
            let total = heights + g.captured().iter().sum::<u32>();
            if total != TZAAR_PIECES {
                return Err(format!("Tzaar holds {} pieces instead of {}", total, TZAAR_PIECES));
            }
        }
        Game::Gipf(g) => {
            let total = gipf_weighted_total(g);
            if let Some(limit) = gipf_limit
                && total > limit
            {
                return Err(format!("Gipf grew from {} to {} pieces", limit, total));
            }
        }
    }
    Ok(())
}

//! Deterministic one-ply opponent.
//!
//! Every candidate input is applied to a copy of the game and the result is
//! scored by material from the mover's point of view. Selecting an origin is
//! worth as much as the best destination it opens up, so a full move is
//! judged even though it takes two inputs.

use hexgames_engine::engine::{Game, Input};
use hexgames_engine::game::{HexGame, PlayerStep};
use hexgames_engine::player::{Occupant, Side};

use crate::Opponent;

/// Score of a finished game, larger than any material difference.
const DECIDED: i64 = 10_000;

#[derive(Debug, Clone, Default)]
pub struct BaselineOpponent;

impl BaselineOpponent {
    pub fn new() -> Self {
        Self
    }

    /// Material balance of `game` for `side`.
    fn material(game: &Game, side: Side) -> i64 {
        if let Some(winner) = game.winner() {
            return match winner.side() {
                Some(s) if s == side => DECIDED,
                Some(_) => -DECIDED,
                None => 0,
            };
        }
        let own = Self::holdings(game, side);
        let other = Self::holdings(game, side.opponent());
        own - other
    }

    fn holdings(game: &Game, side: Side) -> i64 {
        match game {
            Game::Dvonn(g) => g
                .core()
                .board
                .values()
                .filter(|p| p.value.side() == Some(side))
                .map(|p| i64::from(p.stack_count))
                .sum(),
            Game::Gipf(g) => {
                let on_board = g
                    .core()
                    .board
                    .values()
                    .filter(|p| p.value == Occupant::from(side))
                    .count() as i64;
                on_board + i64::from(g.pieces_left().get(side))
            }
            Game::Tzaar(g) => {
                let captured = i64::from(g.captured()[side.index()]);
                let remaining = g.remaining_pieces();
                let own_types = match side {
                    Side::White => &remaining[..3],
                    Side::Black => &remaining[3..],
                };
                // the scarcest type is what the opponent is hunting
                let scarcest = own_types.iter().copied().min().unwrap_or(0);
                captured + 2 * i64::from(scarcest)
            }
        }
    }

    fn evaluate(game: &Game, input: Input, side: Side) -> i64 {
        let mut next = game.clone();
        if !next.apply(input) {
            return i64::MIN;
        }
        let opened_selection =
            game.step() != PlayerStep::LocationTo && next.step() == PlayerStep::LocationTo;
        if !opened_selection {
            return Self::material(&next, side);
        }
        next.legal_moves()
            .iter()
            .map(|&to| {
                let mut after = next.clone();
                after.clicked(to);
                Self::material(&after, side)
            })
            .max()
            .unwrap_or_else(|| Self::material(&next, side))
    }
}

impl Opponent for BaselineOpponent {
    fn choose_input(&mut self, game: &Game) -> Option<Input> {
        let side = game.current_player().side;
        let mut best: Option<(Input, i64)> = None;
        let mut pass = None;
        for input in game.candidate_inputs() {
            if input == Input::Pass {
                pass = Some(Self::evaluate(game, input, side));
                continue;
            }
            let score = Self::evaluate(game, input, side);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((input, score));
            }
        }
        match (best, pass) {
            (Some((_, top)), Some(skip)) if skip > top => Some(Input::Pass),
            (Some((input, _)), _) => Some(input),
            (None, Some(_)) => Some(Input::Pass),
            (None, None) => None,
        }
    }

    fn name(&self) -> &str {
        "BaselineOpponent"
    }
}

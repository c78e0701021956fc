//! # hexgames-ai: computer opponents
//!
//! Opponents choose one [`Input`] at a time from what the engine offers in
//! [`Game::candidate_inputs`], so they play every game and every phase of a
//! turn (setup placement, origin, destination, row capture, pass) through the
//! same surface a human uses.
//!
//! ## Quick Start
//!
//! ```rust
//! use hexgames_ai::create_opponent;
//! use hexgames_engine::engine::Game;
//! use hexgames_engine::game::GameType;
//! use hexgames_engine::options::GameOptions;
//!
//! let mut game = Game::new(GameType::Tzaar, "standard", &GameOptions::default()).unwrap();
//! let mut ai = create_opponent("random", 42).unwrap();
//!
//! let input = ai.choose_input(&game).expect("white can move");
//! assert!(game.apply(input));
//! ```
//!
//! ## Opponent Types
//!
//! - `"random"` - uniform choice among candidates, reproducible from a seed
//! - `"baseline"` - one-ply material evaluation, fully deterministic

use hexgames_engine::engine::{Game, Input};

pub mod baseline;
pub mod random;

pub use baseline::BaselineOpponent;
pub use random::RandomOpponent;

/// Names accepted by [`create_opponent`].
pub const OPPONENT_KINDS: [&str; 2] = ["random", "baseline"];

/// A computer player.
///
/// # Example Implementation
///
/// ```rust
/// use hexgames_ai::Opponent;
/// use hexgames_engine::engine::{Game, Input};
///
/// struct FirstChoice;
///
/// impl Opponent for FirstChoice {
///     fn choose_input(&mut self, game: &Game) -> Option<Input> {
///         game.candidate_inputs().into_iter().next()
///     }
///
///     fn name(&self) -> &str {
///         "FirstChoice"
///     }
/// }
/// ```
pub trait Opponent: Send {
    /// Picks the next input for whoever is to move in `game`.
    ///
    /// Returns `None` when the game is over or nothing can be played.
    fn choose_input(&mut self, game: &Game) -> Option<Input>;

    fn name(&self) -> &str;
}

/// Creates an opponent by kind. `seed` feeds opponents that use randomness.
///
/// # Example
///
/// ```rust
/// use hexgames_ai::create_opponent;
///
/// assert_eq!(create_opponent("baseline", 0).unwrap().name(), "BaselineOpponent");
/// assert!(create_opponent("minimax", 0).is_none());
/// ```
pub fn create_opponent(kind: &str, seed: u64) -> Option<Box<dyn Opponent>> {
    match kind.to_ascii_lowercase().as_str() {
        "random" => Some(Box::new(RandomOpponent::new(seed))),
        "baseline" => Some(Box::new(BaselineOpponent::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_every_listed_kind() {
        for kind in OPPONENT_KINDS {
            assert!(create_opponent(kind, 1).is_some(), "{kind}");
        }
        assert_eq!(create_opponent("RANDOM", 1).unwrap().name(), "RandomOpponent");
        assert!(create_opponent("", 1).is_none());
    }
}

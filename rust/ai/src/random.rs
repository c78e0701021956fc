//! Uniformly random opponent.

use hexgames_engine::engine::{Game, Input};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha20Rng;

use crate::Opponent;

/// Picks any offered input with equal probability.
///
/// Two opponents built from the same seed make the same choices on the same
/// games, which keeps simulations reproducible.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: ChaCha20Rng,
}

impl RandomOpponent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn choose_input(&mut self, game: &Game) -> Option<Input> {
        game.candidate_inputs().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "RandomOpponent"
    }
}

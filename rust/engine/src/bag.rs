use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Seeded generator used for random setups; without a seed one is drawn from
/// the thread generator.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let seed = seed.unwrap_or_else(rand::random);
    ChaCha20Rng::seed_from_u64(seed)
}

/// Pieces to be laid out on a board in random order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceBag {
    pieces: Vec<u8>,
}

impl PieceBag {
    /// Builds a bag from `(piece code, count)` pairs, in order.
    pub fn from_counts(counts: &[(u8, usize)]) -> Self {
        let pieces = counts
            .iter()
            .flat_map(|&(code, n)| std::iter::repeat(code).take(n))
            .collect();
        Self { pieces }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pieces.shuffle(rng);
    }

    /// Places `code` at `index`, shifting later pieces back.
    pub fn insert(&mut self, index: usize, code: u8) {
        let index = index.min(self.pieces.len());
        self.pieces.insert(index, code);
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn count(&self, code: u8) -> usize {
        self.pieces.iter().filter(|&&p| p == code).count()
    }

    pub fn pieces(&self) -> &[u8] {
        &self.pieces
    }

    pub fn into_pieces(self) -> Vec<u8> {
        self.pieces
    }
}

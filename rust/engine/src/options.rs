use chrono::Utc;
use rand::Rng;

use crate::player::{Player, Side};

pub const DEFAULT_PLAYER_IDS: [&str; 2] = ["1212", "4646"];
pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Player1", "Player2"];

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 5;

/// Construction parameters shared by all three games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Defaults to `game-YYYY-MM-DDTHH:MM` at creation time
    pub game_name: Option<String>,
    /// Defaults to a random five character base-36 id
    pub game_id: Option<String>,
    pub player_ids: [String; 2],
    pub player_names: [String; 2],
    /// Seeds random setups and the generated game id
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            game_name: None,
            game_id: None,
            player_ids: DEFAULT_PLAYER_IDS.map(String::from),
            player_names: DEFAULT_PLAYER_NAMES.map(String::from),
            seed: None,
        }
    }
}

impl GameOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_names(mut self, white: impl Into<String>, black: impl Into<String>) -> Self {
        self.player_names = [white.into(), black.into()];
        self
    }

    pub fn players(&self) -> [Player; 2] {
        [
            Player::new(&self.player_ids[0], &self.player_names[0], Side::White),
            Player::new(&self.player_ids[1], &self.player_names[1], Side::Black),
        ]
    }

    pub fn resolved_name(&self) -> String {
        self.game_name
            .clone()
            .unwrap_or_else(|| format!("game-{}", Utc::now().format("%Y-%m-%dT%H:%M")))
    }

    pub fn resolved_id<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match &self.game_id {
            Some(id) => id.clone(),
            None => (0..ID_LEN)
                .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
                .collect(),
        }
    }
}

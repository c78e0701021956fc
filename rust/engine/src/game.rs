use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, BoardShape};
use crate::coord::{Coord, DIRECTIONS};
use crate::errors::GameError;
use crate::log::{GameLog, LogEntry};
use crate::options::GameOptions;
use crate::player::{Player, Side, Winner};

/// Letters used by the board notations of all three games.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVXYZ";

pub(crate) fn notation_letter(index: i32) -> char {
    usize::try_from(index)
        .ok()
        .and_then(|i| ALPHABET.get(i))
        .map(|&b| b as char)
        .unwrap_or('?')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Dvonn,
    Gipf,
    Tzaar,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameType::Dvonn => "Dvonn",
            GameType::Gipf => "Gipf",
            GameType::Tzaar => "Tzaar",
        })
    }
}

impl FromStr for GameType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dvonn" => Ok(GameType::Dvonn),
            "gipf" => Ok(GameType::Gipf),
            "tzaar" => Ok(GameType::Tzaar),
            _ => Err(GameError::UnknownGame(s.to_string())),
        }
    }
}

/// Lifecycle of a game. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[serde(rename = "setup-state")]
    Setup,
    #[serde(rename = "in-progress-state")]
    InProgress,
    #[serde(rename = "completed-state")]
    Completed,
}

/// Which part of a turn the next click answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStep {
    LocationFrom,
    LocationTo,
    CaptureRow,
}

/// Behaviour every per-game cell type provides to the shared core.
pub trait Position: Clone {
    fn set_allowed(&mut self, allowed: bool);
    fn is_empty(&self) -> bool;
}

/// Fields and turn primitives shared by the three games.
#[derive(Debug, Clone, PartialEq)]
pub struct GameCore<P> {
    pub players: [Player; 2],
    pub current: usize,
    pub game_name: String,
    pub game_id: String,
    pub game_type: GameType,
    pub legal_moves: Vec<Coord>,
    pub board: Board<P>,
    pub shape: BoardShape,
    pub state: GameState,
    pub step: PlayerStep,
    pub log: GameLog,
    pub winner: Option<Winner>,
    pub from: Option<Coord>,
}

impl<P: Position> GameCore<P> {
    pub fn new(
        game_type: GameType,
        shape: BoardShape,
        board: Board<P>,
        options: &GameOptions,
        game_id: String,
    ) -> Self {
        let mut core = Self {
            players: options.players(),
            current: 0,
            game_name: options.resolved_name(),
            game_id,
            game_type,
            legal_moves: Vec::new(),
            board,
            shape,
            state: GameState::InProgress,
            step: PlayerStep::LocationFrom,
            log: GameLog::new(),
            winner: None,
            from: None,
        };
        core.add_log(format!("Started a game of {game_type}."));
        core
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_side(&self) -> Side {
        self.players[self.current].side
    }

    pub fn other_player(&self) -> &Player {
        &self.players[1 - self.current]
    }

    pub fn player_for(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn switch_player(&mut self) {
        self.current = 1 - self.current;
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == GameState::InProgress
    }

    pub fn mark_legal_moves(&mut self, on: bool) {
        for at in &self.legal_moves {
            if let Some(position) = self.board.get_mut(at) {
                position.set_allowed(on);
            }
        }
    }

    /// Remembers the selected origin and highlights its destinations.
    pub fn prepare_location_to(&mut self, at: Coord) {
        self.from = Some(at);
        self.step = PlayerStep::LocationTo;
        self.mark_legal_moves(true);
    }

    /// Drops the current selection and its highlights.
    pub fn reset_move(&mut self) {
        self.mark_legal_moves(false);
        self.legal_moves.clear();
        self.from = None;
        self.step = PlayerStep::LocationFrom;
    }

    pub fn add_log(&mut self, message: impl Into<String>) {
        self.log.push(LogEntry::now(message));
    }

    pub fn finish(&mut self, winner: Winner) {
        info!(game = %self.game_id, winner = %winner, "game completed");
        self.state = GameState::Completed;
        self.winner = Some(winner);
    }

    pub fn reject(&self, at: Coord, reason: &str) -> bool {
        debug!(game = %self.game_id, at = %at, reason, "click ignored");
        false
    }

    pub fn snapshot(&self) -> BaseSnapshot<P> {
        BaseSnapshot {
            current_player: self.current_player().clone(),
            players: self.players.clone(),
            game_name: self.game_name.clone(),
            game_id: self.game_id.clone(),
            game_type: self.game_type,
            current_legal_moves: self.legal_moves.clone(),
            board: self.board.clone(),
            game_state: self.state,
            current_player_step: self.step,
            game_log: self.log.clone(),
            winner: self.winner.clone(),
            from_x: self.from.map(|c| c.x),
            from_y: self.from.map(|c| c.y),
            from_z: self.from.map(|c| c.z),
        }
    }

    /// Replaces every shared field with the snapshot's values after checking
    /// that it belongs to this game type and board.
    pub fn restore(&mut self, snapshot: BaseSnapshot<P>) -> Result<(), GameError> {
        if snapshot.game_type != self.game_type {
            return Err(GameError::WrongGameType {
                expected: self.game_type,
                actual: snapshot.game_type,
            });
        }
        let current = snapshot
            .players
            .iter()
            .position(|p| p.id == snapshot.current_player.id)
            .ok_or_else(|| GameError::UnknownPlayer(snapshot.current_player.id.clone()))?;
        if snapshot.board.len() != self.shape.len()
            || snapshot.board.keys().any(|at| !self.shape.contains_coord(*at))
        {
            return Err(GameError::MalformedLayout(
                "snapshot board does not match the board shape".to_string(),
            ));
        }
        let from = match (snapshot.from_x, snapshot.from_y, snapshot.from_z) {
            (Some(x), Some(y), Some(z)) => Some(Coord::new(x, y, z)),
            (None, None, None) => None,
            _ => {
                return Err(GameError::InvalidCoordinate(
                    "partial origin in snapshot".to_string(),
                ))
            }
        };

        self.players = snapshot.players;
        self.current = current;
        self.game_name = snapshot.game_name;
        self.game_id = snapshot.game_id;
        self.legal_moves = snapshot.current_legal_moves;
        self.board = snapshot.board;
        self.state = snapshot.game_state;
        self.step = snapshot.current_player_step;
        self.log = snapshot.game_log;
        self.winner = snapshot.winner;
        self.from = from;
        Ok(())
    }
}

/// Fields every exported game state carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSnapshot<P> {
    pub current_player: Player,
    pub players: [Player; 2],
    pub game_name: String,
    pub game_id: String,
    pub game_type: GameType,
    pub current_legal_moves: Vec<Coord>,
    pub board: Board<P>,
    pub game_state: GameState,
    pub current_player_step: PlayerStep,
    pub game_log: GameLog,
    pub winner: Option<Winner>,
    pub from_x: Option<i32>,
    pub from_y: Option<i32>,
    pub from_z: Option<i32>,
}

/// The capability set each rules engine implements on top of [`GameCore`].
pub trait HexGame {
    type Position: Position;
    type Snapshot: Clone + Serialize + DeserializeOwned;

    fn core(&self) -> &GameCore<Self::Position>;

    fn core_mut(&mut self) -> &mut GameCore<Self::Position>;

    fn game_type(&self) -> GameType;

    /// Builds a cell from its layout code.
    fn create_position(at: Coord, code: u8) -> Result<Self::Position, GameError>
    where
        Self: Sized;

    /// Decides whether a cell reached by [`HexGame::find_positions`] is a
    /// candidate, and which cell it resolves to.
    fn check_game_position(&self, candidate: Coord, dir: Coord) -> Option<Coord>;

    /// Whether the current player may select `at` as an origin.
    fn can_player_use_position(&self, at: Coord) -> bool;

    /// Handles a click while an origin is expected.
    fn move_piece_from_step(&mut self, at: Coord) -> bool;

    fn board_notation(&self, at: Coord) -> String;

    /// Whether a display should refresh highlights for the current step.
    fn should_update(&self) -> bool;

    /// Applies one cell selection. Returns `true` iff the game changed.
    fn clicked(&mut self, at: Coord) -> bool;

    fn export_state(&self) -> Self::Snapshot;

    fn import_state(&mut self, snapshot: Self::Snapshot) -> Result<(), GameError>;

    /// Probes `size` steps away in each of the six directions.
    fn find_positions(&self, at: Coord, size: i32) -> Vec<Coord> {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.check_game_position(at.offset(dir, size), dir))
            .collect()
    }

    fn is_completed(&self) -> bool {
        self.core().state == GameState::Completed
    }

    fn current_player(&self) -> &Player {
        self.core().current_player()
    }

    fn winner(&self) -> Option<&Winner> {
        self.core().winner.as_ref()
    }
}

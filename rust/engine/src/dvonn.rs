//! Dvonn: stacks move exactly their height in a straight line and must stay
//! connected to one of the three Dvonn pieces.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bag::{seeded_rng, PieceBag};
use crate::board::{build_board, empty_layout, populate, BoardShape};
use crate::coord::Coord;
use crate::errors::GameError;
use crate::game::{
    notation_letter, BaseSnapshot, GameCore, GameState, GameType, HexGame, PlayerStep, Position,
};
use crate::options::GameOptions;
use crate::player::{Side, Winner};

pub const TOTAL_PIECES: u32 = 49;
pub const DVONN_PIECES: u32 = 3;
pub const PIECES_PER_SIDE: usize = 23;

const ROW_LENGTHS: [usize; 5] = [9, 10, 11, 10, 9];

/// Layout codes: 0 empty, 1 white, 2 black, 3 Dvonn piece.
pub const STANDARD_LAYOUT: [&[u8]; 5] = [
    &[2, 1, 2, 1, 2, 2, 1, 2, 1],
    &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2],
    &[3, 1, 2, 1, 2, 3, 1, 2, 1, 2, 3],
    &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2],
    &[2, 1, 2, 1, 1, 2, 1, 2, 1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DvonnPiece {
    #[default]
    Empty,
    White,
    Black,
    Dvonn,
}

impl DvonnPiece {
    pub fn side(self) -> Option<Side> {
        match self {
            DvonnPiece::White => Some(Side::White),
            DvonnPiece::Black => Some(Side::Black),
            _ => None,
        }
    }
}

impl From<Side> for DvonnPiece {
    fn from(side: Side) -> Self {
        match side {
            Side::White => DvonnPiece::White,
            Side::Black => DvonnPiece::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DvonnPosition {
    /// Top piece of the stack
    pub value: DvonnPiece,
    pub stack_count: u32,
    pub has_dvonn_piece: bool,
    pub allowed: bool,
}

impl DvonnPosition {
    fn clear(&mut self) {
        self.value = DvonnPiece::Empty;
        self.stack_count = 0;
        self.has_dvonn_piece = false;
    }
}

impl Position for DvonnPosition {
    fn set_allowed(&mut self, allowed: bool) {
        self.allowed = allowed;
    }

    fn is_empty(&self) -> bool {
        self.value == DvonnPiece::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DvonnSetup {
    /// Empty board; players place all 49 pieces by clicking
    Manual,
    Standard,
    Random,
}

impl FromStr for DvonnSetup {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manual" => Ok(DvonnSetup::Manual),
            "standard" => Ok(DvonnSetup::Standard),
            "random" => Ok(DvonnSetup::Random),
            _ => Err(GameError::UnknownSetup {
                game: GameType::Dvonn,
                setup: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DvonnSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DvonnSetup::Manual => "manual",
            DvonnSetup::Standard => "standard",
            DvonnSetup::Random => "random",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DvonnSnapshot {
    #[serde(flatten)]
    pub base: BaseSnapshot<DvonnPosition>,
    /// Final heights per side, `[white, black]`
    pub score: [u32; 2],
    pub setup_pieces_count: u32,
    /// Heights removed by disconnection per side, `[white, black]`
    #[serde(default)]
    pub cleared: [u32; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct DvonnGame {
    core: GameCore<DvonnPosition>,
    score: [u32; 2],
    setup_pieces_count: u32,
    cleared: [u32; 2],
}

impl DvonnGame {
    pub fn new(setup: DvonnSetup, options: &GameOptions) -> Result<Self, GameError> {
        let mut rng = seeded_rng(options.seed);
        Self::new_with_rng(setup, options, &mut rng)
    }

    /// Like [`DvonnGame::new`] but shuffles random setups with `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        setup: DvonnSetup,
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let rows = match setup {
            DvonnSetup::Manual => empty_layout(&ROW_LENGTHS),
            DvonnSetup::Standard => STANDARD_LAYOUT.iter().map(|r| r.to_vec()).collect(),
            DvonnSetup::Random => {
                let mut bag = Self::random_pieces();
                bag.shuffle(rng);
                populate(&empty_layout(&ROW_LENGTHS), bag.pieces())?
            }
        };
        let mut game = Self::build(&rows, options, rng)?;
        if setup == DvonnSetup::Manual {
            game.core.state = GameState::Setup;
        }
        Ok(game)
    }

    /// Starts an in-progress game from an arbitrary layout of codes.
    pub fn from_layout(rows: &[Vec<u8>], options: &GameOptions) -> Result<Self, GameError> {
        let mut rng = seeded_rng(options.seed);
        Self::build(rows, options, &mut rng)
    }

    /// The 49 pieces of a random setup in bag order.
    pub fn random_pieces() -> PieceBag {
        PieceBag::from_counts(&[(1, PIECES_PER_SIDE), (2, PIECES_PER_SIDE), (3, 3)])
    }

    fn build<R: Rng + ?Sized>(
        rows: &[Vec<u8>],
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let shape = BoardShape::dvonn();
        let board = build_board(&shape, rows, Self::create_position)?;
        let placed = board.values().filter(|p| !p.is_empty()).count() as u32;
        let id = options.resolved_id(rng);
        Ok(Self {
            core: GameCore::new(GameType::Dvonn, shape, board, options, id),
            score: [0, 0],
            setup_pieces_count: placed,
            cleared: [0, 0],
        })
    }

    pub fn score(&self) -> [u32; 2] {
        self.score
    }

    pub fn cleared(&self) -> [u32; 2] {
        self.cleared
    }

    pub fn setup_pieces_count(&self) -> u32 {
        self.setup_pieces_count
    }

    pub fn position(&self, at: Coord) -> Option<&DvonnPosition> {
        self.core.board.get(&at)
    }

    /// A stack is free while at least one neighbour is empty or off the board.
    pub fn is_free(&self, at: Coord) -> bool {
        at.neighbors().any(|n| match self.core.board.get(&n) {
            Some(p) => p.is_empty(),
            None => true,
        })
    }

    /// Destinations for the stack at `at`, ignoring whose turn it is.
    pub fn targets(&self, at: Coord) -> Vec<Coord> {
        let Some(origin) = self.core.board.get(&at) else {
            return Vec::new();
        };
        if origin.is_empty() || !self.is_free(at) {
            return Vec::new();
        }
        self.find_positions(at, origin.stack_count as i32)
            .into_iter()
            .filter(|to| {
                let carries_dvonn = self
                    .core
                    .board
                    .get(to)
                    .is_some_and(|p| p.has_dvonn_piece);
                !(origin.has_dvonn_piece && carries_dvonn)
            })
            .collect()
    }

    fn can_move(&self, side: Side, at: Coord) -> bool {
        self.core
            .board
            .get(&at)
            .is_some_and(|p| p.value == DvonnPiece::from(side))
            && !self.targets(at).is_empty()
    }

    pub fn has_any_move(&self, side: Side) -> bool {
        self.core
            .board
            .keys()
            .any(|&at| self.can_move(side, at))
    }

    fn place_setup_piece(&mut self, at: Coord) -> bool {
        let Some(position) = self.core.board.get(&at) else {
            return self.core.reject(at, "outside board");
        };
        if !position.is_empty() {
            return self.core.reject(at, "cell already occupied");
        }

        let notation = self.board_notation(at);
        let count = self.setup_pieces_count;
        let piece = if count < DVONN_PIECES {
            DvonnPiece::Dvonn
        } else if count % 2 == 0 {
            DvonnPiece::Black
        } else {
            DvonnPiece::White
        };
        if let Some(position) = self.core.board.get_mut(&at) {
            position.value = piece;
            position.stack_count = 1;
            position.has_dvonn_piece = piece == DvonnPiece::Dvonn;
        }
        let label = match piece {
            DvonnPiece::Dvonn => "DVONN",
            DvonnPiece::White => "white",
            _ => "black",
        };
        self.core.add_log(format!("Placed {label} piece on: {notation}"));

        self.setup_pieces_count += 1;
        self.core.switch_player();
        if self.setup_pieces_count == TOTAL_PIECES {
            self.core.state = GameState::InProgress;
            self.core.switch_player();
            debug!(game = %self.core.game_id, "setup complete");
        }
        true
    }

    fn move_piece_to_step(&mut self, to: Coord) {
        let Some(from) = self.core.from else {
            return;
        };
        let Some(moving) = self.core.board.get(&from).cloned() else {
            return;
        };
        let mut height = 0;
        if let Some(target) = self.core.board.get_mut(&to) {
            target.stack_count += moving.stack_count;
            target.value = moving.value;
            target.has_dvonn_piece |= moving.has_dvonn_piece;
            height = target.stack_count;
        }
        if let Some(origin) = self.core.board.get_mut(&from) {
            origin.clear();
        }
        self.core.reset_move();

        let removed = self.remove_disconnected();
        let mut message = format!(
            "{} moved {} to {}, stack count: {}.",
            self.core.current_side(),
            self.board_notation(from),
            self.board_notation(to),
            height
        );
        if removed != [0, 0] {
            message.push_str(&format!(
                " Cleared {} white and {} black.",
                removed[0], removed[1]
            ));
        }
        self.core.add_log(message);
        self.proceed_to_next_player();
    }

    /// Empties every stack without a path of occupied cells to a Dvonn piece.
    /// Returns the removed heights per side.
    pub fn remove_disconnected(&mut self) -> [u32; 2] {
        let mut reached = BTreeSet::new();
        let mut stack: Vec<Coord> = self
            .core
            .board
            .iter()
            .filter(|(_, p)| p.has_dvonn_piece)
            .map(|(&at, _)| at)
            .collect();
        while let Some(at) = stack.pop() {
            if !reached.insert(at) {
                continue;
            }
            for n in at.neighbors() {
                if self.core.board.get(&n).is_some_and(|p| !p.is_empty()) && !reached.contains(&n) {
                    stack.push(n);
                }
            }
        }

        let mut removed = [0, 0];
        for (at, position) in self.core.board.iter_mut() {
            if position.is_empty() || reached.contains(at) {
                continue;
            }
            if let Some(side) = position.value.side() {
                removed[side.index()] += position.stack_count;
            }
            position.clear();
        }
        self.cleared[0] += removed[0];
        self.cleared[1] += removed[1];
        removed
    }

    fn proceed_to_next_player(&mut self) {
        let current = self.core.current_side();
        if self.has_any_move(current.opponent()) {
            self.core.switch_player();
        } else if !self.has_any_move(current) {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        let mut score = [0, 0];
        for position in self.core.board.values() {
            if let Some(side) = position.value.side() {
                score[side.index()] += position.stack_count;
            }
        }
        self.score = score;
        let winner = match score[0].cmp(&score[1]) {
            std::cmp::Ordering::Greater => Winner::Player(self.core.player_for(Side::White).clone()),
            std::cmp::Ordering::Less => Winner::Player(self.core.player_for(Side::Black).clone()),
            std::cmp::Ordering::Equal => Winner::Even,
        };
        self.core.add_log(format!(
            "Game over. White {} - black {}, winner: {}.",
            score[0], score[1], winner
        ));
        self.core.finish(winner);
    }
}

impl HexGame for DvonnGame {
    type Position = DvonnPosition;
    type Snapshot = DvonnSnapshot;

    fn core(&self) -> &GameCore<DvonnPosition> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut GameCore<DvonnPosition> {
        &mut self.core
    }

    fn game_type(&self) -> GameType {
        GameType::Dvonn
    }

    fn create_position(at: Coord, code: u8) -> Result<DvonnPosition, GameError> {
        let value = match code {
            0 => DvonnPiece::Empty,
            1 => DvonnPiece::White,
            2 => DvonnPiece::Black,
            3 => DvonnPiece::Dvonn,
            _ => {
                return Err(GameError::MalformedLayout(format!(
                    "unknown Dvonn piece code {code} at {at}"
                )))
            }
        };
        Ok(DvonnPosition {
            value,
            stack_count: u32::from(value != DvonnPiece::Empty),
            has_dvonn_piece: value == DvonnPiece::Dvonn,
            allowed: false,
        })
    }

    fn check_game_position(&self, candidate: Coord, _dir: Coord) -> Option<Coord> {
        self.core
            .board
            .get(&candidate)
            .filter(|p| !p.is_empty())
            .map(|_| candidate)
    }

    fn can_player_use_position(&self, at: Coord) -> bool {
        self.core.is_in_progress() && self.can_move(self.core.current_side(), at)
    }

    fn move_piece_from_step(&mut self, at: Coord) -> bool {
        if !self.can_player_use_position(at) {
            return self.core.reject(at, "not a movable stack of the current player");
        }
        self.core.legal_moves = self.targets(at);
        self.core.prepare_location_to(at);
        true
    }

    /// Letter from the diagonal, number from the rank, e.g. `"A 1"`.
    fn board_notation(&self, at: Coord) -> String {
        format!("{} {}", notation_letter(at.z + 5 + at.x), 3 + at.z)
    }

    fn should_update(&self) -> bool {
        self.core.step == PlayerStep::LocationTo || self.core.state == GameState::Setup
    }

    fn clicked(&mut self, at: Coord) -> bool {
        if !self.core.shape.contains_coord(at) {
            return self.core.reject(at, "outside board");
        }
        match (self.core.state, self.core.step) {
            (GameState::Setup, _) => self.place_setup_piece(at),
            (GameState::InProgress, PlayerStep::LocationFrom) => self.move_piece_from_step(at),
            (GameState::InProgress, PlayerStep::LocationTo) => {
                if self.core.from == Some(at) {
                    self.core.reset_move();
                    true
                } else if self.core.legal_moves.contains(&at) {
                    self.move_piece_to_step(at);
                    true
                } else {
                    self.core.reject(at, "not a legal destination")
                }
            }
            _ => self.core.reject(at, "no click expected"),
        }
    }

    fn export_state(&self) -> DvonnSnapshot {
        DvonnSnapshot {
            base: self.core.snapshot(),
            score: self.score,
            setup_pieces_count: self.setup_pieces_count,
            cleared: self.cleared,
        }
    }

    fn import_state(&mut self, snapshot: DvonnSnapshot) -> Result<(), GameError> {
        self.core.restore(snapshot.base)?;
        self.score = snapshot.score;
        self.setup_pieces_count = snapshot.setup_pieces_count;
        self.cleared = snapshot.cleared;
        Ok(())
    }
}

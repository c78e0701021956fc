//! Tzaar: stacks slide in straight lines to capture weaker or equal enemy
//! stacks. A side loses as soon as one of its three piece types is gone.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bag::{seeded_rng, PieceBag};
use crate::board::{build_board, empty_layout, populate, BoardShape};
use crate::coord::{Coord, ORIGIN};
use crate::errors::GameError;
use crate::game::{
    notation_letter, BaseSnapshot, GameCore, GameState, GameType, HexGame, PlayerStep, Position,
};
use crate::options::GameOptions;
use crate::player::{Occupant, Side, Winner};

pub const BOARD_RADIUS: i32 = 4;
/// Pieces per type in a full set, indexed by piece code minus one.
pub const FULL_SET: [u32; 6] = [6, 9, 15, 6, 9, 15];
pub const TOTAL_PIECES: u32 = 60;

const ROW_LENGTHS: [usize; 9] = [5, 6, 7, 8, 9, 8, 7, 6, 5];
/// Row-major index of the centre cell in a layout.
const CENTRE_INDEX: usize = 30;

/// Layout codes: 0 empty, 1-3 white tzaar/tzarras/totts, 4-6 black tzaar/tzarras/totts.
pub const STANDARD_LAYOUT: [&[u8]; 9] = [
    &[3, 3, 3, 3, 6],
    &[6, 2, 2, 2, 5, 6],
    &[6, 5, 1, 1, 4, 5, 6],
    &[6, 5, 4, 3, 6, 4, 5, 6],
    &[6, 5, 4, 6, 0, 3, 1, 2, 3],
    &[3, 2, 1, 3, 6, 1, 2, 3],
    &[3, 2, 1, 4, 4, 2, 3],
    &[3, 2, 5, 5, 5, 3],
    &[3, 6, 6, 6, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TzaarPiece {
    #[default]
    Empty,
    WhiteTzaar,
    WhiteTzarras,
    WhiteTotts,
    BlackTzaar,
    BlackTzarras,
    BlackTotts,
}

impl TzaarPiece {
    const ALL: [TzaarPiece; 7] = [
        TzaarPiece::Empty,
        TzaarPiece::WhiteTzaar,
        TzaarPiece::WhiteTzarras,
        TzaarPiece::WhiteTotts,
        TzaarPiece::BlackTzaar,
        TzaarPiece::BlackTzarras,
        TzaarPiece::BlackTotts,
    ];

    pub fn from_code(code: u8) -> Option<TzaarPiece> {
        Self::ALL.get(usize::from(code)).copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn side(self) -> Option<Side> {
        match self.code() {
            0 => None,
            1..=3 => Some(Side::White),
            _ => Some(Side::Black),
        }
    }

    /// Type name without the colour.
    pub fn kind(self) -> &'static str {
        match self {
            TzaarPiece::Empty => "empty",
            TzaarPiece::WhiteTzaar | TzaarPiece::BlackTzaar => "tzaars",
            TzaarPiece::WhiteTzarras | TzaarPiece::BlackTzarras => "tzarras",
            TzaarPiece::WhiteTotts | TzaarPiece::BlackTotts => "totts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TzaarPosition {
    pub value: Occupant,
    /// Top piece of the stack
    pub piece: TzaarPiece,
    pub stack_count: u32,
    pub allowed: bool,
}

impl TzaarPosition {
    fn clear(&mut self) {
        self.value = Occupant::Empty;
        self.piece = TzaarPiece::Empty;
        self.stack_count = 0;
    }
}

impl Position for TzaarPosition {
    fn set_allowed(&mut self, allowed: bool) {
        self.allowed = allowed;
    }

    fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Which of the two actions of a turn comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TzaarSetup {
    Standard,
    Random,
}

impl FromStr for TzaarSetup {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(TzaarSetup::Standard),
            "random" => Ok(TzaarSetup::Random),
            _ => Err(GameError::UnknownSetup {
                game: GameType::Tzaar,
                setup: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TzaarSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TzaarSetup::Standard => "standard",
            TzaarSetup::Random => "random",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TzaarSnapshot {
    #[serde(flatten)]
    pub base: BaseSnapshot<TzaarPosition>,
    pub current_action: Action,
    pub remaining_pieces: [u32; 6],
    pub first_move: bool,
    /// Heights taken off the board by each side, `[white, black]`
    #[serde(default)]
    pub captured: [u32; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct TzaarGame {
    core: GameCore<TzaarPosition>,
    current_action: Action,
    remaining_pieces: [u32; 6],
    first_move: bool,
    captured: [u32; 2],
}

impl TzaarGame {
    pub fn new(setup: TzaarSetup, options: &GameOptions) -> Result<Self, GameError> {
        let mut rng = seeded_rng(options.seed);
        Self::new_with_rng(setup, options, &mut rng)
    }

    /// Like [`TzaarGame::new`] but shuffles random setups with `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        setup: TzaarSetup,
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let rows = match setup {
            TzaarSetup::Standard => STANDARD_LAYOUT.iter().map(|r| r.to_vec()).collect(),
            TzaarSetup::Random => {
                let mut bag = Self::random_pieces();
                bag.shuffle(rng);
                bag.insert(CENTRE_INDEX, 0);
                populate(&empty_layout(&ROW_LENGTHS), bag.pieces())?
            }
        };
        Self::build(&rows, options, rng)
    }

    /// Starts a game from an arbitrary layout of codes. The remaining-piece
    /// vector counts the pieces on the layout.
    pub fn from_layout(rows: &[Vec<u8>], options: &GameOptions) -> Result<Self, GameError> {
        let mut rng = seeded_rng(options.seed);
        Self::build(rows, options, &mut rng)
    }

    /// The 60 pieces of a full set in bag order.
    pub fn random_pieces() -> PieceBag {
        let counts: Vec<(u8, usize)> = FULL_SET
            .iter()
            .enumerate()
            .map(|(i, &n)| (i as u8 + 1, n as usize))
            .collect();
        PieceBag::from_counts(&counts)
    }

    fn build<R: Rng + ?Sized>(
        rows: &[Vec<u8>],
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let shape = BoardShape::hexagon(BOARD_RADIUS);
        let board = build_board(&shape, rows, Self::create_position)?;
        if board.get(&ORIGIN).is_some_and(|p| !p.is_empty()) {
            return Err(GameError::MalformedLayout(
                "the centre cell must stay empty".to_string(),
            ));
        }
        let mut remaining = [0u32; 6];
        for position in board.values() {
            if let Some(slot) = usize::from(position.piece.code()).checked_sub(1) {
                remaining[slot] += 1;
            }
        }
        let id = options.resolved_id(rng);
        Ok(Self {
            core: GameCore::new(GameType::Tzaar, shape, board, options, id),
            current_action: Action::First,
            remaining_pieces: remaining,
            first_move: true,
            captured: [0, 0],
        })
    }

    pub fn current_action(&self) -> Action {
        self.current_action
    }

    pub fn remaining_pieces(&self) -> [u32; 6] {
        self.remaining_pieces
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn captured(&self) -> [u32; 2] {
        self.captured
    }

    pub fn position(&self, at: Coord) -> Option<&TzaarPosition> {
        self.core.board.get(&at)
    }

    /// Destinations for the stack at `at` when it acts for `side` in `action`.
    pub fn targets(&self, at: Coord, side: Side, action: Action) -> Vec<Coord> {
        let Some(origin) = self.core.board.get(&at) else {
            return Vec::new();
        };
        if origin.value.side() != Some(side) {
            return Vec::new();
        }
        self.find_positions(at, 1)
            .into_iter()
            .filter(|to| {
                let Some(target) = self.core.board.get(to) else {
                    return false;
                };
                match target.value.side() {
                    Some(s) if s == side => action == Action::Second,
                    Some(_) => origin.stack_count >= target.stack_count,
                    None => false,
                }
            })
            .collect()
    }

    fn has_action(&self, side: Side, action: Action) -> bool {
        self.core
            .board
            .keys()
            .any(|&at| !self.targets(at, side, action).is_empty())
    }

    fn capture(&mut self, from: Coord, to: Coord) {
        let side = self.core.current_side();
        let Some(moving) = self.core.board.get(&from).cloned() else {
            return;
        };
        let Some(target) = self.core.board.get_mut(&to) else {
            return;
        };
        if let Some(slot) = usize::from(target.piece.code()).checked_sub(1) {
            self.remaining_pieces[slot] = self.remaining_pieces[slot].saturating_sub(1);
        }
        let text = if target.value == moving.value {
            target.stack_count += moving.stack_count;
            format!("Stacked to height {}.", target.stack_count)
        } else {
            self.captured[side.index()] += target.stack_count;
            target.stack_count = moving.stack_count;
            target.value = moving.value;
            "Captured.".to_string()
        };
        target.piece = moving.piece;
        if let Some(origin) = self.core.board.get_mut(&from) {
            origin.clear();
        }
        let message = format!(
            "{side} from {} to {}. {text}",
            self.board_notation(from),
            self.board_notation(to)
        );
        self.core.add_log(message);
    }

    /// Ends the game when a piece type has been wiped out.
    fn check_depleted(&mut self) -> bool {
        let Some(slot) = self.remaining_pieces.iter().position(|&n| n == 0) else {
            return false;
        };
        let Some(loser) = TzaarPiece::from_code(slot as u8 + 1) else {
            return false;
        };
        let Some(losing_side) = loser.side() else {
            return false;
        };
        let winner = self.core.player_for(losing_side.opponent()).clone();
        self.core.add_log(format!(
            "Game side {} wins because {} ran out of {}.",
            winner.side,
            losing_side,
            loser.kind()
        ));
        self.core.finish(Winner::Player(winner));
        true
    }

    /// Hands the turn over, or ends the game if the opponent cannot capture.
    fn pass_turn(&mut self) {
        self.current_action = Action::First;
        let side = self.core.current_side();
        if !self.has_action(side.opponent(), Action::First) {
            let winner = self.core.current_player().clone();
            self.core.add_log(format!(
                "Game side {} wins because {} cannot capture.",
                side,
                side.opponent()
            ));
            self.core.finish(Winner::Player(winner));
        } else {
            self.core.switch_player();
        }
    }

    fn proceed_to_next_move_or_player(&mut self) {
        if self.first_move {
            self.first_move = false;
            self.pass_turn();
        } else if self.current_action == Action::First {
            self.current_action = Action::Second;
            if !self.has_action(self.core.current_side(), Action::Second) {
                debug!(game = %self.core.game_id, "no second action available");
                self.pass_turn();
            }
        } else {
            self.pass_turn();
        }
    }

    /// Whether the current player may decline the optional second action.
    pub fn can_pass(&self) -> bool {
        self.core.is_in_progress() && self.current_action == Action::Second
    }

    /// Declines the second action and hands the turn over.
    pub fn pass_action(&mut self) -> bool {
        if !self.can_pass() {
            return false;
        }
        self.core.reset_move();
        let side = self.core.current_side();
        self.core.add_log(format!("{side} passed."));
        self.pass_turn();
        true
    }
}

impl HexGame for TzaarGame {
    type Position = TzaarPosition;
    type Snapshot = TzaarSnapshot;

    fn core(&self) -> &GameCore<TzaarPosition> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut GameCore<TzaarPosition> {
        &mut self.core
    }

    fn game_type(&self) -> GameType {
        GameType::Tzaar
    }

    fn create_position(at: Coord, code: u8) -> Result<TzaarPosition, GameError> {
        let piece = TzaarPiece::from_code(code).ok_or_else(|| {
            GameError::MalformedLayout(format!("unknown Tzaar piece code {code} at {at}"))
        })?;
        Ok(TzaarPosition {
            value: piece.side().map(Occupant::from).unwrap_or_default(),
            piece,
            stack_count: u32::from(piece != TzaarPiece::Empty),
            allowed: false,
        })
    }

    /// Slides from the scanned cell until the first occupied cell. The centre cell
    /// blocks movement like the board edge.
    fn check_game_position(&self, candidate: Coord, dir: Coord) -> Option<Coord> {
        let mut cur = candidate;
        while self.core.shape.contains_coord(cur) && cur != ORIGIN {
            if self.core.board.get(&cur).is_some_and(|p| !p.is_empty()) {
                return Some(cur);
            }
            cur = cur.step(dir);
        }
        None
    }

    fn can_player_use_position(&self, at: Coord) -> bool {
        self.core.is_in_progress()
            && !self
                .targets(at, self.core.current_side(), self.current_action)
                .is_empty()
    }

    fn move_piece_from_step(&mut self, at: Coord) -> bool {
        if !self.can_player_use_position(at) {
            return self.core.reject(at, "no legal action from this cell");
        }
        self.core.legal_moves = self.targets(at, self.core.current_side(), self.current_action);
        self.core.prepare_location_to(at);
        true
    }

    fn board_notation(&self, at: Coord) -> String {
        format!("{}{}", notation_letter(4 - at.z), at.y + 5)
    }

    fn should_update(&self) -> bool {
        self.core.step == PlayerStep::LocationTo
    }

    fn clicked(&mut self, at: Coord) -> bool {
        if self.core.state != GameState::InProgress {
            return self.core.reject(at, "game not in progress");
        }
        if !self.core.shape.contains_coord(at) {
            return self.core.reject(at, "outside board");
        }
        match self.core.step {
            PlayerStep::LocationFrom => self.move_piece_from_step(at),
            PlayerStep::LocationTo if self.core.from == Some(at) => {
                self.core.reset_move();
                true
            }
            PlayerStep::LocationTo => {
                let Some(from) = self.core.from else {
                    return self.core.reject(at, "no origin selected");
                };
                if !self.core.legal_moves.contains(&at) {
                    return self.core.reject(at, "not a legal destination");
                }
                self.capture(from, at);
                self.core.reset_move();
                if !self.check_depleted() {
                    self.proceed_to_next_move_or_player();
                }
                true
            }
            PlayerStep::CaptureRow => self.core.reject(at, "no click expected"),
        }
    }

    fn export_state(&self) -> TzaarSnapshot {
        TzaarSnapshot {
            base: self.core.snapshot(),
            current_action: self.current_action,
            remaining_pieces: self.remaining_pieces,
            first_move: self.first_move,
            captured: self.captured,
        }
    }

    fn import_state(&mut self, snapshot: TzaarSnapshot) -> Result<(), GameError> {
        self.core.restore(snapshot.base)?;
        self.current_action = snapshot.current_action;
        self.remaining_pieces = snapshot.remaining_pieces;
        self.first_move = snapshot.first_move;
        self.captured = snapshot.captured;
        Ok(())
    }
}

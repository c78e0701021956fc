//! Gipf: pieces enter from the outer ring and push lines inward. Four or more
//! pieces of one side in a row are taken off the board together with every
//! piece extending that row.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bag::seeded_rng;
use crate::board::{build_board, BoardShape};
use crate::coord::{Coord, AXES, DIRECTIONS};
use crate::errors::GameError;
use crate::game::{
    notation_letter, BaseSnapshot, GameCore, GameState, GameType, HexGame, PlayerStep, Position,
};
use crate::options::GameOptions;
use crate::player::{Occupant, Side, Winner};

pub const BOARD_RADIUS: i32 = 4;
pub const MIN_LINE_LENGTH: usize = 4;
pub const STARTING_RESERVE: u32 = 12;
/// Reserve credited when a side takes back one of its own GIPF pieces.
pub const GIPF_PIECE_VALUE: u32 = 2;

/// Layout codes: 0 empty, 1 white, 2 black, 3 white GIPF piece, 4 black GIPF piece.
pub const STANDARD_LAYOUT: [&[u8]; 9] = [
    &[0, 0, 0, 0, 0],
    &[0, 1, 0, 0, 2, 0],
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 2, 0, 0, 0, 0, 0, 1, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0],
    &[0, 1, 0, 0, 2, 0],
    &[0, 0, 0, 0, 0],
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GipfPosition {
    pub value: Occupant,
    pub is_gipf_piece: bool,
    /// Highlighted as removable by the current player
    pub is_in_complete_row: bool,
    pub allowed: bool,
}

impl Position for GipfPosition {
    fn set_allowed(&mut self, allowed: bool) {
        self.allowed = allowed;
    }

    fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// A GIPF piece lying in a completed row, removable by `player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GipfOwner {
    pub player: Side,
    pub pos: Coord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecesLeft {
    pub white: u32,
    pub black: u32,
}

impl PiecesLeft {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GipfSetup {
    /// Three plain pieces per side
    Basic,
    /// Three GIPF pieces per side
    Standard,
}

impl FromStr for GipfSetup {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(GipfSetup::Basic),
            "standard" => Ok(GipfSetup::Standard),
            _ => Err(GameError::UnknownSetup {
                game: GameType::Gipf,
                setup: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GipfSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GipfSetup::Basic => "basic",
            GipfSetup::Standard => "standard",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GipfSnapshot {
    #[serde(flatten)]
    pub base: BaseSnapshot<GipfPosition>,
    pub pieces_left: PiecesLeft,
    pub selectable_rows: Vec<Vec<Coord>>,
    pub clearable_rows: Vec<Vec<Coord>>,
    pub streaks: Vec<Vec<Coord>>,
    pub captured_streaks: Vec<Vec<Coord>>,
    pub intersections: BTreeSet<Coord>,
    pub gipf_positions: Vec<GipfOwner>,
    pub captured_gipfs: Vec<Coord>,
    pub temp_player_switch: bool,
    pub standard_mode: bool,
    pub can_skip_gipf: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GipfGame {
    core: GameCore<GipfPosition>,
    pieces_left: PiecesLeft,
    /// Cells each legal push would move, parallel to the legal moves
    selectable_rows: Vec<Vec<Coord>>,
    /// Capturable span of each detected line, parallel to `streaks`
    clearable_rows: Vec<Vec<Coord>>,
    /// The same-side runs of at least four pieces
    streaks: Vec<Vec<Coord>>,
    captured_streaks: Vec<Vec<Coord>>,
    intersections: BTreeSet<Coord>,
    gipf_positions: Vec<GipfOwner>,
    captured_gipfs: Vec<Coord>,
    /// The turn already passed during the current capture phase
    temp_player_switch: bool,
    standard_mode: bool,
    can_skip_gipf: bool,
}

impl GipfGame {
    pub fn new(setup: GipfSetup, options: &GameOptions) -> Result<Self, GameError> {
        let mut rng = seeded_rng(options.seed);
        let rows: Vec<Vec<u8>> = STANDARD_LAYOUT
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&code| match (setup, code) {
                        (GipfSetup::Standard, 1 | 2) => code + 2,
                        _ => code,
                    })
                    .collect()
            })
            .collect();
        Self::build(&rows, options, &mut rng)
    }

    /// Starts a game from an arbitrary layout of codes, both reserves full.
    pub fn from_layout(rows: &[Vec<u8>], options: &GameOptions) -> Result<Self, GameError> {
        let mut rng = seeded_rng(options.seed);
        Self::build(rows, options, &mut rng)
    }

    fn build<R: Rng + ?Sized>(
        rows: &[Vec<u8>],
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let shape = BoardShape::hexagon(BOARD_RADIUS);
        let board = build_board(&shape, rows, Self::create_position)?;
        if let Some((at, _)) = board
            .iter()
            .find(|(at, p)| !p.is_empty() && shape.is_edge(**at))
        {
            return Err(GameError::MalformedLayout(format!(
                "piece on the outer ring at {at}"
            )));
        }
        let standard_mode = board.values().any(|p| p.is_gipf_piece);
        let id = options.resolved_id(rng);
        Ok(Self {
            core: GameCore::new(GameType::Gipf, shape, board, options, id),
            pieces_left: PiecesLeft {
                white: STARTING_RESERVE,
                black: STARTING_RESERVE,
            },
            selectable_rows: Vec::new(),
            clearable_rows: Vec::new(),
            streaks: Vec::new(),
            captured_streaks: Vec::new(),
            intersections: BTreeSet::new(),
            gipf_positions: Vec::new(),
            captured_gipfs: Vec::new(),
            temp_player_switch: false,
            standard_mode,
            can_skip_gipf: false,
        })
    }

    pub fn pieces_left(&self) -> PiecesLeft {
        self.pieces_left
    }

    pub fn streaks(&self) -> &[Vec<Coord>] {
        &self.streaks
    }

    pub fn clearable_rows(&self) -> &[Vec<Coord>] {
        &self.clearable_rows
    }

    pub fn intersections(&self) -> &BTreeSet<Coord> {
        &self.intersections
    }

    pub fn gipf_positions(&self) -> &[GipfOwner] {
        &self.gipf_positions
    }

    pub fn can_skip_gipf(&self) -> bool {
        self.can_skip_gipf
    }

    pub fn is_standard_mode(&self) -> bool {
        self.standard_mode
    }

    pub fn position(&self, at: Coord) -> Option<&GipfPosition> {
        self.core.board.get(&at)
    }

    fn occupant(&self, at: Coord) -> Occupant {
        self.core
            .board
            .get(&at)
            .map(|p| p.value)
            .unwrap_or(Occupant::Empty)
    }

    fn is_gipf(&self, at: Coord) -> bool {
        self.core.board.get(&at).is_some_and(|p| p.is_gipf_piece)
    }

    /// Every legal push from the edge cell `at`: the entry cell and the
    /// cells the push moves, ending at the empty cell that absorbs it.
    pub fn push_rows(&self, at: Coord) -> Vec<(Coord, Vec<Coord>)> {
        if !self.core.shape.is_edge(at) {
            return Vec::new();
        }
        let shape = &self.core.shape;
        DIRECTIONS
            .iter()
            .filter_map(|&dir| {
                let entry = self.check_game_position(at.step(dir), dir)?;
                let mut row = vec![entry];
                let mut cur = entry;
                while !shape.is_edge(cur) && !self.occupant(cur).is_empty() {
                    cur = cur.step(dir);
                    row.push(cur);
                }
                (!shape.is_edge(cur) && self.occupant(cur).is_empty()).then_some((entry, row))
            })
            .collect()
    }

    fn push_piece(&mut self, to: Coord) {
        let Some(index) = self.core.legal_moves.iter().position(|&m| m == to) else {
            return;
        };
        let Some(row) = self.selectable_rows.get(index).cloned() else {
            return;
        };
        for k in (1..row.len()).rev() {
            let Some(prev) = self.core.board.get(&row[k - 1]).cloned() else {
                continue;
            };
            if let Some(cell) = self.core.board.get_mut(&row[k]) {
                cell.value = prev.value;
                cell.is_gipf_piece = prev.is_gipf_piece;
            }
        }
        let side = self.core.current_side();
        if let Some(entry) = self.core.board.get_mut(&to) {
            entry.value = side.into();
            entry.is_gipf_piece = false;
        }
        *self.pieces_left.get_mut(side) -= 1;
        let notation = self.board_notation(to);
        self.core.add_log(format!("{side} to {notation}."));
        self.selectable_rows.clear();
    }

    /// Rebuilds the detected lines, their intersections and the GIPF pieces
    /// they make removable.
    pub fn find_complete_rows(&mut self) {
        let mut found: BTreeMap<(usize, i32), (Vec<Coord>, Vec<Coord>)> = BTreeMap::new();

        for (&at, position) in &self.core.board {
            if position.is_empty() {
                continue;
            }
            for (axis_index, &axis) in AXES.iter().enumerate() {
                let back = axis.reversed();
                if self.occupant(at.step(back)) == position.value {
                    continue;
                }
                let mut streak = vec![at];
                let mut cur = at.step(axis);
                while self.occupant(cur) == position.value {
                    streak.push(cur);
                    cur = cur.step(axis);
                }
                if streak.len() < MIN_LINE_LENGTH {
                    continue;
                }
                let key = (axis_index, at.line_offset(axis));
                if found.get(&key).is_some_and(|(s, _)| s.len() >= streak.len()) {
                    continue;
                }

                let mut start = at;
                while !self.occupant(start.step(back)).is_empty() {
                    start = start.step(back);
                }
                let mut span = Vec::new();
                let mut cur = start;
                while !self.occupant(cur).is_empty() {
                    span.push(cur);
                    cur = cur.step(axis);
                }
                found.insert(key, (streak, span));
            }
        }

        self.streaks.clear();
        self.clearable_rows.clear();
        self.captured_streaks.clear();
        self.captured_gipfs.clear();
        self.gipf_positions.clear();
        for (streak, span) in found.into_values() {
            self.streaks.push(streak);
            self.clearable_rows.push(span);
        }

        let mut frequency: BTreeMap<Coord, usize> = BTreeMap::new();
        for at in self.streaks.iter().flatten() {
            *frequency.entry(*at).or_default() += 1;
        }
        self.intersections = frequency
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(at, _)| at)
            .collect();

        for (streak, span) in self.streaks.iter().zip(&self.clearable_rows) {
            let Some(player) = streak.first().and_then(|&at| self.occupant(at).side()) else {
                continue;
            };
            for &pos in span {
                let owner = GipfOwner { player, pos };
                if self.is_gipf(pos) && !self.gipf_positions.contains(&owner) {
                    self.gipf_positions.push(owner);
                }
            }
        }
        debug!(
            game = %self.core.game_id,
            lines = self.streaks.len(),
            claims = self.gipf_positions.len(),
            "scanned lines"
        );
    }

    fn update_position_marks(&mut self) {
        let side = self.core.current_side();
        let mut marked = BTreeSet::new();
        for at in self.clearable_rows.iter().flatten() {
            if !self.intersections.contains(at)
                && !self.is_gipf(*at)
                && self.occupant(*at).side() == Some(side)
            {
                marked.insert(*at);
            }
        }
        for owner in &self.gipf_positions {
            if owner.player == side {
                marked.insert(owner.pos);
            }
        }
        for (at, position) in self.core.board.iter_mut() {
            position.is_in_complete_row = marked.contains(at);
        }
    }

    fn remove_line(&mut self, index: usize) {
        self.streaks.remove(index);
        self.clearable_rows.remove(index);
    }

    /// Keeps the lines whose streak satisfies `keep`.
    fn retain_lines<F: Fn(&GipfGame, &[Coord]) -> bool>(&mut self, keep: F) {
        let mask: Vec<bool> = self.streaks.iter().map(|s| keep(self, s.as_slice())).collect();
        let mut mask = mask.into_iter();
        let (streaks, rows): (Vec<_>, Vec<_>) = self
            .streaks
            .drain(..)
            .zip(self.clearable_rows.drain(..))
            .filter(|_| mask.next().unwrap_or(false))
            .unzip();
        self.streaks = streaks;
        self.clearable_rows = rows;
    }

    /// Removes the line through `at` or claims the GIPF piece on `at`.
    fn capture_row_or_gipf(&mut self, at: Coord) -> bool {
        let side = self.core.current_side();
        let line = self
            .clearable_rows
            .iter()
            .zip(&self.streaks)
            .position(|(row, streak)| {
                row.contains(&at)
                    && streak.iter().any(|&c| self.occupant(c).side() == Some(side))
            });

        match line {
            Some(index) if !self.intersections.contains(&at) && !self.is_gipf(at) => {
                self.capture_line(index, side);
                true
            }
            _ if self
                .gipf_positions
                .iter()
                .any(|o| o.pos == at && o.player == side) =>
            {
                self.capture_gipf(at, side);
                true
            }
            _ => false,
        }
    }

    fn capture_line(&mut self, index: usize, side: Side) {
        let span = self.clearable_rows[index].clone();
        let streak = self.streaks[index].clone();
        let (mut regained, mut captured) = (0, 0);
        for at in &span {
            let Some(cell) = self.core.board.get_mut(at) else {
                continue;
            };
            if cell.is_gipf_piece {
                continue;
            }
            match cell.value.side() {
                Some(s) if s == side => regained += 1,
                Some(_) => captured += 1,
                None => {}
            }
            cell.value = Occupant::Empty;
        }
        *self.pieces_left.get_mut(side) += regained;

        // A GIPF piece where two taken rows cross is no longer claimable.
        for done in &self.captured_streaks {
            if let Some(shared) = streak.iter().find(|at| done.contains(at)) {
                self.gipf_positions.retain(|o| o.pos != *shared);
            }
        }
        self.captured_streaks.push(streak);
        self.remove_line(index);

        self.retain_lines(|game, streak| {
            let count = |side: Occupant| {
                streak
                    .iter()
                    .filter(|&&at| game.occupant(at) == side)
                    .count()
            };
            count(Occupant::White) >= MIN_LINE_LENGTH || count(Occupant::Black) >= MIN_LINE_LENGTH
        });

        let message = if captured > 0 {
            format!("{side} regained {regained} and captured {captured}.")
        } else {
            format!("{side} regained {regained}.")
        };
        self.core.add_log(message);
    }

    fn capture_gipf(&mut self, at: Coord, side: Side) {
        let own = self.occupant(at).side() == Some(side);
        if own {
            *self.pieces_left.get_mut(side) += GIPF_PIECE_VALUE;
        }
        let notation = self.board_notation(at);
        if let Some(cell) = self.core.board.get_mut(&at) {
            cell.value = Occupant::Empty;
            cell.is_gipf_piece = false;
        }
        self.gipf_positions.retain(|o| o.pos != at);
        self.captured_gipfs.push(at);
        if self.captured_streaks.iter().flatten().any(|&c| c == at) {
            self.retain_lines(|_, streak| !streak.contains(&at));
        }
        let verb = if own { "took back" } else { "captured" };
        self.core
            .add_log(format!("{side} {verb} the GIPF piece on {notation}."));
    }

    /// Keeps the current side in the capture phase while it still has a row
    /// to take; otherwise hands the phase over or offers to skip.
    fn check_if_switch_player(&mut self) {
        let side = self.core.current_side();
        let has_claims = self.gipf_positions.iter().any(|o| o.player == side);
        self.can_skip_gipf = false;

        if self.streaks.is_empty() && self.temp_player_switch {
            self.can_skip_gipf = has_claims;
            return;
        }

        let has_line = self.streaks.iter().any(|streak| {
            streak
                .iter()
                .filter(|&&at| {
                    self.occupant(at).side() == Some(side) || self.captured_gipfs.contains(&at)
                })
                .count()
                >= MIN_LINE_LENGTH
        });
        if has_line {
            return;
        }

        if has_claims {
            self.can_skip_gipf = true;
        } else {
            self.proceed_to_next_player();
            self.temp_player_switch = true;
            let next = self.core.current_side();
            self.can_skip_gipf = self.streaks.is_empty()
                && self.gipf_positions.iter().any(|o| o.player == next);
        }
    }

    fn finish_capture_phase_if_done(&mut self) {
        if !self.clearable_rows.is_empty() || !self.gipf_positions.is_empty() {
            return;
        }
        if self.temp_player_switch {
            self.temp_player_switch = false;
        } else {
            self.proceed_to_next_player();
        }
        self.can_skip_gipf = false;
        self.core.reset_move();
    }

    /// Declines the remaining GIPF claims of the current side.
    pub fn skip_special_capture(&mut self) -> bool {
        if !self.core.is_in_progress()
            || self.core.step != PlayerStep::CaptureRow
            || !self.can_skip_gipf
        {
            return false;
        }
        let side = self.core.current_side();
        self.gipf_positions.retain(|o| o.player != side);
        self.can_skip_gipf = false;
        self.core
            .add_log(format!("{side} left the remaining GIPF pieces on the board."));

        if self.streaks.is_empty() {
            if self.temp_player_switch {
                self.temp_player_switch = false;
            } else {
                self.proceed_to_next_player();
            }
            self.core.reset_move();
        } else {
            self.temp_player_switch = true;
            self.proceed_to_next_player();
        }
        self.update_position_marks();
        true
    }

    fn proceed_to_next_player(&mut self) {
        if !self.core.is_in_progress() {
            return;
        }
        let next = self.core.current_side().opponent();
        if self.pieces_left.get(next) == 0 {
            let winner = self.core.current_player().clone();
            self.core
                .add_log(format!("Game side {} wins.", winner.side));
            self.core.finish(Winner::Player(winner));
        } else {
            self.core.switch_player();
        }
    }
}

impl HexGame for GipfGame {
    type Position = GipfPosition;
    type Snapshot = GipfSnapshot;

    fn core(&self) -> &GameCore<GipfPosition> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut GameCore<GipfPosition> {
        &mut self.core
    }

    fn game_type(&self) -> GameType {
        GameType::Gipf
    }

    fn create_position(at: Coord, code: u8) -> Result<GipfPosition, GameError> {
        let (value, is_gipf_piece) = match code {
            0 => (Occupant::Empty, false),
            1 => (Occupant::White, false),
            2 => (Occupant::Black, false),
            3 => (Occupant::White, true),
            4 => (Occupant::Black, true),
            _ => {
                return Err(GameError::MalformedLayout(format!(
                    "unknown Gipf piece code {code} at {at}"
                )))
            }
        };
        Ok(GipfPosition {
            value,
            is_gipf_piece,
            is_in_complete_row: false,
            allowed: false,
        })
    }

    /// Pushes only ever enter interior cells.
    fn check_game_position(&self, candidate: Coord, _dir: Coord) -> Option<Coord> {
        (self.core.shape.contains_coord(candidate) && !self.core.shape.is_edge(candidate)).then_some(candidate)
    }

    fn can_player_use_position(&self, at: Coord) -> bool {
        self.core.is_in_progress()
            && self.pieces_left.get(self.core.current_side()) > 0
            && !self.push_rows(at).is_empty()
    }

    fn move_piece_from_step(&mut self, at: Coord) -> bool {
        if !self.can_player_use_position(at) {
            return self.core.reject(at, "no push from this cell");
        }
        let (entries, rows): (Vec<_>, Vec<_>) = self.push_rows(at).into_iter().unzip();
        self.core.legal_moves = entries;
        self.selectable_rows = rows;
        self.core.prepare_location_to(at);
        true
    }

    fn board_notation(&self, at: Coord) -> String {
        format!("{}{}", notation_letter(4 - at.y), at.z + 5)
    }

    fn should_update(&self) -> bool {
        matches!(
            self.core.step,
            PlayerStep::LocationTo | PlayerStep::CaptureRow
        )
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
                self.selectable_rows.clear();
                self.core.reset_move();
                true
            }
            PlayerStep::LocationTo => {
                if !self.core.legal_moves.contains(&at) {
                    return self.core.reject(at, "not a legal push");
                }
                if self.pieces_left.get(self.core.current_side()) == 0 {
                    return self.core.reject(at, "no piece left to push");
                }
                self.push_piece(at);
                self.find_complete_rows();
                self.core.mark_legal_moves(false);
                self.core.legal_moves.clear();
                if self.clearable_rows.is_empty() {
                    self.core.reset_move();
                    self.proceed_to_next_player();
                } else {
                    self.core.step = PlayerStep::CaptureRow;
                    self.check_if_switch_player();
                    self.update_position_marks();
                }
                true
            }
            PlayerStep::CaptureRow => {
                if !self.capture_row_or_gipf(at) {
                    return self.core.reject(at, "nothing to capture here");
                }
                self.check_if_switch_player();
                self.update_position_marks();
                self.finish_capture_phase_if_done();
                true
            }
        }
    }

    fn export_state(&self) -> GipfSnapshot {
        GipfSnapshot {
            base: self.core.snapshot(),
            pieces_left: self.pieces_left,
            selectable_rows: self.selectable_rows.clone(),
            clearable_rows: self.clearable_rows.clone(),
            streaks: self.streaks.clone(),
            captured_streaks: self.captured_streaks.clone(),
            intersections: self.intersections.clone(),
            gipf_positions: self.gipf_positions.clone(),
            captured_gipfs: self.captured_gipfs.clone(),
            temp_player_switch: self.temp_player_switch,
            standard_mode: self.standard_mode,
            can_skip_gipf: self.can_skip_gipf,
        }
    }

    fn import_state(&mut self, snapshot: GipfSnapshot) -> Result<(), GameError> {
        if snapshot.streaks.len() != snapshot.clearable_rows.len() {
            return Err(GameError::Decode(
                "streaks and clearableRows differ in length".to_string(),
            ));
        }
        let base = &snapshot.base;
        if base.game_state == GameState::InProgress
            && base.current_player_step == PlayerStep::LocationTo
            && snapshot.pieces_left.get(base.current_player.side) == 0
        {
            return Err(GameError::Decode(format!(
                "{} is selecting a push with no pieces left",
                base.current_player.side
            )));
        }
        self.core.restore(snapshot.base)?;
        self.pieces_left = snapshot.pieces_left;
        self.selectable_rows = snapshot.selectable_rows;
        self.clearable_rows = snapshot.clearable_rows;
        self.streaks = snapshot.streaks;
        self.captured_streaks = snapshot.captured_streaks;
        self.intersections = snapshot.intersections;
        self.gipf_positions = snapshot.gipf_positions;
        self.captured_gipfs = snapshot.captured_gipfs;
        self.temp_player_switch = snapshot.temp_player_switch;
        self.standard_mode = snapshot.standard_mode;
        self.can_skip_gipf = snapshot.can_skip_gipf;
        Ok(())
    }
}

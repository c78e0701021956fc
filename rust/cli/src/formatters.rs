//! Text rendering of boards, inputs and outcomes for terminal display.
//!
//! Boards are drawn rank by rank (constant `z`), shifted so that neighbouring
//! cells line up diagonally. Cell labels:
//!
//! - Dvonn: `W`/`B`/`D` plus stack height, `*` when the stack holds a Dvonn piece
//! - Gipf: `w`/`b` plain pieces, `W`/`B` GIPF pieces, `+` empty edge cells
//! - Tzaar: `T` tzaar, `Z` tzarras, `O` totts (upper case white, lower case
//!   black) plus stack height above one, `x` for the centre
//!
//! Empty cells are `.`; cells the current selection can reach are wrapped in
//! angle brackets.

use std::collections::BTreeMap;

use hexgames_engine::coord::{Coord, ORIGIN};
use hexgames_engine::dvonn::DvonnPiece;
use hexgames_engine::engine::{Game, Input};
use hexgames_engine::game::{GameState, HexGame, PlayerStep};
use hexgames_engine::player::{Occupant, Winner};
use hexgames_engine::tzaar::{Action, TzaarPiece};

const CELL_WIDTH: usize = 6;

pub fn cell_label(game: &Game, at: Coord) -> String {
    match game {
        Game::Dvonn(g) => match g.position(at) {
            Some(p) if p.value != DvonnPiece::Empty => {
                let letter = match p.value {
                    DvonnPiece::White => 'W',
                    DvonnPiece::Black => 'B',
                    _ => 'D',
                };
                let mark = if p.has_dvonn_piece && p.value != DvonnPiece::Dvonn {
                    "*"
                } else {
                    ""
                };
                format!("{}{}{}", letter, p.stack_count, mark)
            }
            _ => ".".to_string(),
        },
        Game::Gipf(g) => match g.position(at) {
            Some(p) => match (p.value, p.is_gipf_piece) {
                (Occupant::White, true) => "W".to_string(),
                (Occupant::Black, true) => "B".to_string(),
                (Occupant::White, false) => "w".to_string(),
                (Occupant::Black, false) => "b".to_string(),
                (Occupant::Empty, _) if g.core().shape.is_edge(at) => "+".to_string(),
                (Occupant::Empty, _) => ".".to_string(),
            },
            None => ".".to_string(),
        },
        Game::Tzaar(g) => match g.position(at) {
            _ if at == ORIGIN => "x".to_string(),
            Some(p) if p.piece != TzaarPiece::Empty => {
                let letter = match p.piece {
                    TzaarPiece::WhiteTzaar => 'T',
                    TzaarPiece::WhiteTzarras => 'Z',
                    TzaarPiece::WhiteTotts => 'O',
                    TzaarPiece::BlackTzaar => 't',
                    TzaarPiece::BlackTzarras => 'z',
                    _ => 'o',
                };
                if p.stack_count > 1 {
                    format!("{}{}", letter, p.stack_count)
                } else {
                    letter.to_string()
                }
            }
            _ => ".".to_string(),
        },
    }
}

/// Draws the whole board, one rank per line, with the rank's `z` in front.
pub fn format_board(game: &Game) -> String {
    let mut ranks: BTreeMap<i32, Vec<Coord>> = BTreeMap::new();
    for at in game.cells() {
        ranks.entry(at.z).or_default().push(at);
    }
    let column = |at: &Coord| 2 * at.x + at.z;
    let min_column = game.cells().iter().map(column).min().unwrap_or(0);
    let legal = game.legal_moves();

    let mut out = String::new();
    for (z, mut row) in ranks {
        row.sort_by_key(|at| at.x);
        let first = row.first().map(column).unwrap_or(min_column);
        let indent = (first - min_column) as usize * CELL_WIDTH / 2;
        let mut line = format!("{:>3} | {}", z, " ".repeat(indent));
        for at in &row {
            let mut label = cell_label(game, *at);
            if legal.contains(at) {
                label = format!("<{}>", label);
            }
            line.push_str(&format!("{:^width$}", label, width = CELL_WIDTH));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// `"D 5 (-4,2,2)"` for a click, `"pass"` otherwise.
pub fn format_input(game: &Game, input: &Input) -> String {
    match input {
        Input::Click(at) if game.cells().contains(at) => {
            format!("{} ({})", game.board_notation(*at), at)
        }
        Input::Click(at) => format!("off-board ({})", at),
        Input::Pass => "pass".to_string(),
    }
}

pub fn format_outcome(winner: Option<&Winner>) -> String {
    match winner {
        Some(Winner::Player(p)) => format!("Winner: {} ({})", p.name, p.side),
        Some(Winner::Even) => "Result: even".to_string(),
        None => "Result: unfinished".to_string(),
    }
}

/// What the player to move is expected to do next.
pub fn format_prompt(game: &Game) -> String {
    let player = game.current_player();
    let task = match (game, game.state(), game.step()) {
        (Game::Dvonn(_), GameState::Setup, _) => "place a piece",
        (Game::Gipf(_), _, PlayerStep::LocationFrom) => "choose an edge cell to push from",
        (Game::Tzaar(t), _, PlayerStep::LocationFrom) if t.current_action() == Action::Second => {
            "second action: capture, stack or pass"
        }
        (_, _, PlayerStep::LocationFrom) => "select a stack",
        (_, _, PlayerStep::LocationTo) => "select a destination (or the origin to cancel)",
        (_, _, PlayerStep::CaptureRow) if game.can_pass() => {
            "remove a row or GIPF piece, or skip"
        }
        (_, _, PlayerStep::CaptureRow) => "remove a row or GIPF piece",
    };
    format!("{} ({}): {}", player.name, player.side, task)
}

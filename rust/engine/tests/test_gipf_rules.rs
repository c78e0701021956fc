use std::collections::BTreeSet;

use hexgames_engine::board::BoardShape;
use hexgames_engine::coord::Coord;
use hexgames_engine::errors::GameError;
use hexgames_engine::game::{GameState, HexGame, PlayerStep};
use hexgames_engine::gipf::{GipfGame, GipfOwner, GipfSetup, STARTING_RESERVE};
use hexgames_engine::options::GameOptions;
use hexgames_engine::player::{Occupant, Side, Winner};

/// Empty Gipf layout with the given `(x, z, code)` cells filled in.
fn layout(cells: &[(i32, i32, u8)]) -> Vec<Vec<u8>> {
    let shape = BoardShape::hexagon(4);
    let mut rows: Vec<Vec<u8>> = [5, 6, 7, 8, 9, 8, 7, 6, 5]
        .iter()
        .map(|&n| vec![0; n])
        .collect();
    for &(x, z, code) in cells {
        let (lo, _) = shape.x_limits(z).expect("rank on board");
        rows[(4 + z) as usize][(x - lo) as usize] = code;
    }
    rows
}

fn from_layout(cells: &[(i32, i32, u8)]) -> GipfGame {
    GipfGame::from_layout(&layout(cells), &GameOptions::default()).expect("valid layout")
}

fn occupant(game: &GipfGame, x: i32, y: i32, z: i32) -> Occupant {
    game.position(Coord::new(x, y, z)).unwrap().value
}

const EDGE: Coord = Coord::new(-4, 4, 0);
const ENTRY: Coord = Coord::new(-3, 3, 0);

#[test]
fn standard_setup_places_gipf_pieces_on_start_cells() {
    let game = GipfGame::new(GipfSetup::Standard, &GameOptions::default()).unwrap();
    assert!(game.is_standard_mode());
    let white = [(0, 3, -3), (3, -3, 0), (-3, 0, 3)];
    let black = [(3, 0, -3), (-3, 3, 0), (0, -3, 3)];
    for (x, y, z) in white {
        let p = game.position(Coord::new(x, y, z)).unwrap();
        assert_eq!(p.value, Occupant::White);
        assert!(p.is_gipf_piece);
    }
    for (x, y, z) in black {
        let p = game.position(Coord::new(x, y, z)).unwrap();
        assert_eq!(p.value, Occupant::Black);
        assert!(p.is_gipf_piece);
    }
    let occupied = game.core().board.values().filter(|p| !p.value.is_empty()).count();
    assert_eq!(occupied, 6);
    assert_eq!(game.pieces_left().white, STARTING_RESERVE);
    assert_eq!(game.pieces_left().black, STARTING_RESERVE);
}

#[test]
fn basic_setup_uses_plain_pieces() {
    let game = GipfGame::new(GipfSetup::Basic, &GameOptions::default()).unwrap();
    assert!(!game.is_standard_mode());
    assert!(game.core().board.values().all(|p| !p.is_gipf_piece));
    assert_eq!(occupant(&game, -3, 3, 0), Occupant::Black);
}

#[test]
fn pushes_start_from_the_edge_only() {
    let mut game = GipfGame::new(GipfSetup::Basic, &GameOptions::default()).unwrap();
    assert!(!game.clicked(Coord::new(0, 0, 0)));
    assert!(!game.clicked(Coord::new(0, 3, -3)));
    assert!(game.push_rows(Coord::new(1, 1, -2)).is_empty());

    assert!(game.clicked(EDGE));
    assert_eq!(game.core().step, PlayerStep::LocationTo);
    assert_eq!(game.core().legal_moves, vec![ENTRY]);
}

#[test]
fn push_shifts_the_row_and_passes_the_turn() {
    let mut game = GipfGame::new(GipfSetup::Basic, &GameOptions::default()).unwrap();
    assert!(game.clicked(EDGE));
    assert!(game.clicked(ENTRY));

    assert_eq!(occupant(&game, -3, 3, 0), Occupant::White);
    assert_eq!(occupant(&game, -2, 2, 0), Occupant::Black);
    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1);
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.core().step, PlayerStep::LocationFrom);
    let last = game.core().log.last().unwrap();
    assert_eq!(last.message, "white to B5.");
}

#[test]
fn four_in_a_row_is_captured_with_its_extension() {
    let mut game = from_layout(&[(-3, 0, 1), (-2, 0, 1), (-1, 0, 1), (0, 0, 2)]);
    assert!(game.clicked(EDGE));
    assert!(game.clicked(ENTRY));

    assert_eq!(game.core().step, PlayerStep::CaptureRow);
    assert_eq!(game.streaks().len(), 1);
    assert_eq!(game.streaks()[0].len(), 4);
    assert_eq!(game.clearable_rows()[0].len(), 5);
    assert_eq!(game.current_player().side, Side::White);
    assert!(game.position(ENTRY).unwrap().is_in_complete_row);
    assert!(!game.position(Coord::new(1, -1, 0)).unwrap().is_in_complete_row);

    assert!(!game.clicked(Coord::new(2, -2, 0)));
    assert!(game.clicked(Coord::new(-2, 2, 0)));

    assert!(game.core().board.values().all(|p| p.value.is_empty()));
    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1 + 4);
    assert_eq!(game.pieces_left().black, STARTING_RESERVE);
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.core().step, PlayerStep::LocationFrom);
    assert!(game.streaks().is_empty());
    assert_eq!(
        game.core().log.last().unwrap().message,
        "white regained 4 and captured 1."
    );
}

#[test]
fn crossing_rows_share_an_intersection() {
    let mut game = from_layout(&[
        (-2, 0, 1),
        (-1, 0, 1),
        (0, 0, 1),
        (-3, 1, 1),
        (-3, 2, 1),
        (-3, 3, 1),
    ]);
    assert!(game.clicked(EDGE));
    assert!(game.clicked(ENTRY));

    assert_eq!(game.streaks().len(), 2);
    assert_eq!(game.intersections(), &BTreeSet::from([ENTRY]));
    assert!(!game.position(ENTRY).unwrap().is_in_complete_row);

    // the shared cell cannot pick a row
    assert!(!game.clicked(ENTRY));
    assert!(game.clicked(Coord::new(-1, 1, 0)));

    // the crossing row lost its shared piece and no longer counts
    assert!(game.streaks().is_empty());
    assert_eq!(occupant(&game, -3, 2, 1), Occupant::White);
    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1 + 4);
    assert_eq!(game.current_player().side, Side::Black);
}

#[test]
fn opponent_row_hands_the_capture_to_its_owner() {
    let mut game = from_layout(&[(-3, 0, 2), (-2, 0, 2), (-1, 0, 2), (1, 0, 2)]);
    assert!(game.clicked(EDGE));
    assert!(game.clicked(ENTRY));

    // white's push completed black's row only
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.core().step, PlayerStep::CaptureRow);
    assert_eq!(game.streaks().len(), 1);
    assert_eq!(game.clearable_rows()[0].len(), 5);
    assert!(game.position(Coord::new(-1, 1, 0)).unwrap().is_in_complete_row);
    assert!(!game.position(ENTRY).unwrap().is_in_complete_row);

    assert!(game.clicked(Coord::new(-1, 1, 0)));
    assert_eq!(
        game.core().log.last().unwrap().message,
        "black regained 4 and captured 1."
    );
    assert!(game.core().board.values().all(|p| p.value.is_empty()));
    assert!(game.clearable_rows().is_empty());
    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1);
    assert_eq!(game.pieces_left().black, STARTING_RESERVE + 4);

    // black keeps the turn it was handed
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.core().step, PlayerStep::LocationFrom);
    assert!(game.clicked(EDGE));
    assert!(game.clicked(ENTRY));
    assert_eq!(game.current_player().side, Side::White);
}

/// White rows along z = 0 and x = -2 crossing at a white GIPF piece on
/// (-2, 2, 0), completed by a push onto the entry cell.
fn rows_crossing_at_gipf() -> GipfGame {
    let mut game = from_layout(&[
        (-2, 0, 3),
        (-1, 0, 1),
        (0, 0, 1),
        (-2, 1, 1),
        (-2, 2, 1),
        (-2, 3, 1),
    ]);
    assert!(game.clicked(EDGE));
    assert!(game.clicked(ENTRY));
    assert_eq!(game.streaks().len(), 2);
    assert_eq!(game.intersections(), &BTreeSet::from([Coord::new(-2, 2, 0)]));
    assert_eq!(
        game.gipf_positions(),
        &[GipfOwner {
            player: Side::White,
            pos: Coord::new(-2, 2, 0)
        }]
    );

    assert!(game.clicked(Coord::new(-1, 1, 0)));
    assert_eq!(game.core().log.last().unwrap().message, "white regained 3.");
    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1 + 3);
    assert_eq!(game.streaks().len(), 1);
    assert_eq!(game.clearable_rows().len(), 1);
    assert_eq!(game.gipf_positions().len(), 1);
    assert_eq!(game.current_player().side, Side::White);
    assert_eq!(game.core().step, PlayerStep::CaptureRow);
    game
}

#[test]
fn second_row_through_a_gipf_piece_releases_its_claim() {
    let mut game = rows_crossing_at_gipf();
    assert!(game.clicked(Coord::new(-2, 1, 1)));

    assert!(game.gipf_positions().is_empty());
    assert!(game.streaks().is_empty());
    assert!(game.clearable_rows().is_empty());
    let gipf = game.position(Coord::new(-2, 2, 0)).unwrap();
    assert!(gipf.is_gipf_piece);
    assert_eq!(gipf.value, Occupant::White);
    assert_eq!(occupant(&game, -2, 0, 2), Occupant::Empty);
    assert_eq!(occupant(&game, -2, -1, 3), Occupant::Empty);

    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1 + 3 + 3);
    assert_eq!(game.pieces_left().black, STARTING_RESERVE);
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.core().step, PlayerStep::LocationFrom);
    assert!(!game.can_skip_gipf());
}

#[test]
fn claiming_gipf_on_a_taken_row_drops_rows_through_it() {
    let mut game = rows_crossing_at_gipf();
    assert!(game.clicked(Coord::new(-2, 2, 0)));

    assert!(game
        .core()
        .log
        .last()
        .unwrap()
        .message
        .starts_with("white took back the GIPF piece on "));
    let cell = game.position(Coord::new(-2, 2, 0)).unwrap();
    assert!(cell.value.is_empty());
    assert!(!cell.is_gipf_piece);

    // the crossing row lost its GIPF piece and is no longer pending
    assert!(game.streaks().is_empty());
    assert!(game.clearable_rows().is_empty());
    assert!(game.gipf_positions().is_empty());
    assert_eq!(occupant(&game, -2, 1, 1), Occupant::White);
    assert_eq!(occupant(&game, -2, 0, 2), Occupant::White);
    assert_eq!(occupant(&game, -2, -1, 3), Occupant::White);

    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1 + 3 + 2);
    assert_eq!(game.pieces_left().black, STARTING_RESERVE);
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.core().step, PlayerStep::LocationFrom);
}

#[test]
fn line_scan_keeps_one_entry_per_line() {
    let mut game = from_layout(&[(-2, 0, 2), (-1, 0, 2), (0, 0, 2), (1, 0, 2), (2, 0, 2)]);
    game.find_complete_rows();
    assert_eq!(game.streaks().len(), 1);
    assert_eq!(game.streaks()[0].len(), 5);
    assert!(game.intersections().is_empty());
}

fn gipf_in_row() -> GipfGame {
    let mut game = from_layout(&[(-2, 0, 3), (-1, 0, 1), (0, 0, 1)]);
    assert!(game.clicked(EDGE));
    assert!(game.clicked(ENTRY));
    assert_eq!(
        game.gipf_positions(),
        &[GipfOwner {
            player: Side::White,
            pos: Coord::new(-2, 2, 0)
        }]
    );
    assert!(game.clicked(ENTRY));
    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1 + 3);
    assert!(game.position(Coord::new(-2, 2, 0)).unwrap().is_gipf_piece);
    assert!(game.can_skip_gipf());
    assert_eq!(game.core().step, PlayerStep::CaptureRow);
    assert_eq!(game.current_player().side, Side::White);
    game
}

#[test]
fn own_gipf_piece_can_be_taken_back() {
    let mut game = gipf_in_row();
    assert!(game.clicked(Coord::new(-2, 2, 0)));

    let cell = game.position(Coord::new(-2, 2, 0)).unwrap();
    assert!(cell.value.is_empty());
    assert!(!cell.is_gipf_piece);
    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1 + 3 + 2);
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.core().step, PlayerStep::LocationFrom);
    assert!(!game.can_skip_gipf());
}

#[test]
fn gipf_claim_can_be_skipped() {
    let mut game = gipf_in_row();
    assert!(game.skip_special_capture());

    assert!(game.position(Coord::new(-2, 2, 0)).unwrap().is_gipf_piece);
    assert!(game.gipf_positions().is_empty());
    assert_eq!(game.pieces_left().white, STARTING_RESERVE - 1 + 3);
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.core().step, PlayerStep::LocationFrom);
    assert!(!game.skip_special_capture());
}

#[test]
fn empty_reserve_ends_the_game() {
    let mut game = GipfGame::new(GipfSetup::Basic, &GameOptions::default()).unwrap();
    let mut snapshot = game.export_state();
    snapshot.pieces_left.black = 0;
    game.import_state(snapshot).unwrap();

    assert!(game.clicked(EDGE));
    assert!(game.clicked(ENTRY));

    assert_eq!(game.core().state, GameState::Completed);
    assert_eq!(
        game.winner(),
        Some(&Winner::Player(game.core().players[0].clone()))
    );
    assert!(!game.clicked(Coord::new(4, -4, 0)));
}

#[test]
fn pieces_on_the_outer_ring_are_rejected() {
    let rows = layout(&[(-4, 0, 1)]);
    assert!(matches!(
        GipfGame::from_layout(&rows, &GameOptions::default()),
        Err(GameError::MalformedLayout(_))
    ));
}

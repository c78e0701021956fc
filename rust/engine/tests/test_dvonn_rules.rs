use std::collections::BTreeSet;

use hexgames_engine::board::BoardShape;
use hexgames_engine::coord::Coord;
use hexgames_engine::dvonn::{DvonnGame, DvonnPiece, DvonnSetup, TOTAL_PIECES};
use hexgames_engine::game::{GameState, HexGame, PlayerStep};
use hexgames_engine::options::GameOptions;
use hexgames_engine::player::{Side, Winner};

fn standard() -> DvonnGame {
    DvonnGame::new(DvonnSetup::Standard, &GameOptions::default()).expect("standard setup")
}

/// Empty Dvonn layout with the given `(x, z, code)` cells filled in.
fn layout(cells: &[(i32, i32, u8)]) -> Vec<Vec<u8>> {
    let shape = BoardShape::dvonn();
    let mut rows: Vec<Vec<u8>> = [9, 10, 11, 10, 9].iter().map(|&n| vec![0; n]).collect();
    for &(x, z, code) in cells {
        let (lo, _) = shape.x_limits(z).expect("rank on board");
        rows[(2 + z) as usize][(x - lo) as usize] = code;
    }
    rows
}

fn changed_cells(a: &DvonnGame, b: &DvonnGame) -> BTreeSet<Coord> {
    a.core()
        .board
        .iter()
        .filter(|(at, p)| b.core().board[*at] != **p)
        .map(|(at, _)| *at)
        .collect()
}

#[test]
fn standard_opening_move_changes_two_cells() {
    let mut game = standard();
    let before = game.clone();
    assert_eq!(game.core().log.len(), 1);

    assert!(game.clicked(Coord::new(-4, 2, 2)));
    assert_eq!(game.core().step, PlayerStep::LocationTo);
    assert!(game.clicked(Coord::new(-4, 3, 1)));

    let changed = changed_cells(&before, &game);
    assert_eq!(
        changed,
        BTreeSet::from([Coord::new(-4, 2, 2), Coord::new(-4, 3, 1)])
    );
    let to = game.position(Coord::new(-4, 3, 1)).unwrap();
    assert_eq!(to.value, DvonnPiece::White);
    assert_eq!(to.stack_count, 2);
    assert_eq!(game.position(Coord::new(-4, 2, 2)).unwrap().stack_count, 0);
    assert_eq!(game.core().log.len(), 2);
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.core().step, PlayerStep::LocationFrom);
    assert!(game.core().board.values().all(|p| !p.allowed));
}

#[test]
fn selecting_marks_targets_and_second_click_cancels() {
    let mut game = standard();
    let origin = Coord::new(-4, 2, 2);
    assert!(game.clicked(origin));
    assert_eq!(game.core().legal_moves.len(), 4);
    assert_eq!(game.core().from, Some(origin));
    for at in game.core().legal_moves.clone() {
        assert!(game.position(at).unwrap().allowed);
    }

    assert!(game.clicked(origin));
    assert_eq!(game.core().step, PlayerStep::LocationFrom);
    assert_eq!(game.core().from, None);
    assert!(game.core().board.values().all(|p| !p.allowed));
    assert_eq!(game.current_player().side, Side::White);
}

#[test]
fn illegal_clicks_leave_state_untouched() {
    let mut game = standard();
    let before = game.export_state();
    // opponent stack, surrounded stack, Dvonn piece, off-board cell
    for at in [
        Coord::new(-4, 3, 1),
        Coord::new(-1, 1, 0),
        Coord::new(0, 0, 0),
        Coord::new(9, -9, 0),
    ] {
        assert!(!game.clicked(at), "{at} should be rejected");
        assert_eq!(game.export_state(), before);
    }

    assert!(game.clicked(Coord::new(-4, 2, 2)));
    let selected = game.export_state();
    assert!(!game.clicked(Coord::new(2, -2, 0)));
    assert!(!game.clicked(Coord::new(2, -2, 0)));
    assert_eq!(game.export_state(), selected);
}

#[test]
fn disconnected_stacks_are_removed() {
    let rows = layout(&[(0, 0, 3), (1, 0, 1), (2, 0, 2), (3, 0, 2)]);
    let mut game = DvonnGame::from_layout(&rows, &GameOptions::default()).unwrap();

    assert!(game.clicked(Coord::new(1, -1, 0)));
    assert!(game.clicked(Coord::new(2, -2, 0)));

    assert_eq!(game.cleared(), [2, 1]);
    let occupied: Vec<Coord> = game
        .core()
        .board
        .iter()
        .filter(|(_, p)| p.stack_count > 0)
        .map(|(at, _)| *at)
        .collect();
    assert_eq!(occupied, vec![Coord::new(0, 0, 0)]);
    assert!(game.is_completed());
    assert_eq!(game.score(), [0, 0]);
    assert_eq!(game.winner(), Some(&Winner::Even));
    let last = &game.core().log[game.core().log.len() - 2];
    assert!(last.message.contains("Cleared 2 white and 1 black"), "{}", last.message);
}

#[test]
fn moving_onto_dvonn_piece_keeps_it_connected() {
    let rows = layout(&[(0, 0, 3), (1, 0, 1), (2, 0, 2), (3, 0, 2)]);
    let mut game = DvonnGame::from_layout(&rows, &GameOptions::default()).unwrap();

    assert!(game.clicked(Coord::new(1, -1, 0)));
    assert!(game.clicked(Coord::new(0, 0, 0)));

    let top = game.position(Coord::new(0, 0, 0)).unwrap();
    assert_eq!(top.value, DvonnPiece::White);
    assert!(top.has_dvonn_piece);
    assert_eq!(top.stack_count, 2);
    assert_eq!(game.cleared(), [0, 2]);
    assert!(game.is_completed());
    assert_eq!(game.score(), [2, 0]);
    assert_eq!(
        game.winner().and_then(|w| w.side()),
        Some(Side::White)
    );
}

#[test]
fn stack_with_dvonn_piece_cannot_land_on_another() {
    let rows = layout(&[(0, 0, 3), (1, 0, 1), (2, 0, 3)]);
    let mut game = DvonnGame::from_layout(&rows, &GameOptions::default()).unwrap();
    assert_eq!(game.targets(Coord::new(1, -1, 0)).len(), 2);

    assert!(game.clicked(Coord::new(1, -1, 0)));
    assert!(game.clicked(Coord::new(0, 0, 0)));

    assert!(game.targets(Coord::new(0, 0, 0)).is_empty());
    assert_eq!(game.core().state, GameState::Completed);
    assert_eq!(game.score(), [2, 0]);
}

#[test]
fn player_without_moves_is_skipped() {
    // the black stack is surrounded on all six sides
    let rows = layout(&[
        (0, 0, 3),
        (1, 0, 2),
        (1, -1, 1),
        (1, 1, 1),
        (2, -1, 1),
        (0, 1, 1),
        (2, 0, 1),
        (-1, 0, 1),
    ]);
    let mut game = DvonnGame::from_layout(&rows, &GameOptions::default()).unwrap();
    assert!(!game.has_any_move(Side::Black));
    assert!(!game.is_free(Coord::new(1, -1, 0)));

    assert!(game.clicked(Coord::new(-1, 1, 0)));
    assert!(game.clicked(Coord::new(0, 0, 0)));

    assert!(!game.is_completed());
    assert_eq!(game.cleared(), [0, 0]);
    assert_eq!(game.current_player().side, Side::White);
    assert!(!game.has_any_move(Side::Black));
}

#[test]
fn manual_setup_places_all_pieces() {
    let mut game = DvonnGame::new(DvonnSetup::Manual, &GameOptions::default()).unwrap();
    assert_eq!(game.core().state, GameState::Setup);
    let cells: Vec<Coord> = game.core().shape.cells().collect();

    for (i, at) in cells.iter().enumerate() {
        assert!(game.clicked(*at), "placement {i} at {at}");
        if i == 0 {
            assert!(!game.clicked(*at), "occupied cell accepted");
            assert_eq!(game.current_player().side, Side::Black);
        }
        if i == 2 {
            let dvonn = game
                .core()
                .board
                .values()
                .filter(|p| p.value == DvonnPiece::Dvonn)
                .count();
            assert_eq!(dvonn, 3);
        }
    }

    assert_eq!(game.setup_pieces_count(), TOTAL_PIECES);
    assert_eq!(game.core().state, GameState::InProgress);
    assert_eq!(game.current_player().side, Side::White);
    let board = &game.core().board;
    let count = |piece: DvonnPiece| board.values().filter(|p| p.value == piece).count();
    assert_eq!(count(DvonnPiece::White), 23);
    assert_eq!(count(DvonnPiece::Black), 23);
    assert_eq!(count(DvonnPiece::Dvonn), 3);
}

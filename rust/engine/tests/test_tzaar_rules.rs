use hexgames_engine::board::BoardShape;
use hexgames_engine::coord::Coord;
use hexgames_engine::errors::GameError;
use hexgames_engine::game::{GameState, HexGame, PlayerStep};
use hexgames_engine::options::GameOptions;
use hexgames_engine::player::{Side, Winner};
use hexgames_engine::tzaar::{Action, TzaarGame, TzaarPiece, TzaarSetup};

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

/// Middle rank given as nine codes from x = -4 upward, plus extra cells.
fn middle_rank(codes: [u8; 9], extra: &[(i32, i32, u8)]) -> TzaarGame {
    let mut cells: Vec<(i32, i32, u8)> = codes
        .iter()
        .enumerate()
        .map(|(k, &code)| (k as i32 - 4, 0, code))
        .collect();
    cells.extend_from_slice(extra);
    TzaarGame::from_layout(&layout(&cells), &GameOptions::default()).expect("valid layout")
}

fn past_first_move(mut game: TzaarGame) -> TzaarGame {
    let mut snapshot = game.export_state();
    snapshot.first_move = false;
    game.import_state(snapshot).unwrap();
    game
}

fn white_player(game: &TzaarGame) -> Winner {
    Winner::Player(game.core().players[0].clone())
}

#[test]
fn standard_layout_matches_the_full_set() {
    let game = TzaarGame::new(TzaarSetup::Standard, &GameOptions::default()).unwrap();
    assert_eq!(game.remaining_pieces(), [6, 9, 15, 6, 9, 15]);
    assert!(game.position(Coord::new(0, 0, 0)).unwrap().piece == TzaarPiece::Empty);
    assert_eq!(
        game.position(Coord::new(1, -1, 0)).unwrap().piece,
        TzaarPiece::WhiteTotts
    );
    assert_eq!(
        game.position(Coord::new(0, -1, 1)).unwrap().piece,
        TzaarPiece::BlackTotts
    );
    assert!(game.is_first_move());
    assert_eq!(game.current_action(), Action::First);
}

#[test]
fn opening_turn_is_a_single_capture() {
    let mut game = TzaarGame::new(TzaarSetup::Standard, &GameOptions::default()).unwrap();
    assert!(game.clicked(Coord::new(1, -1, 0)));
    assert_eq!(game.core().step, PlayerStep::LocationTo);
    assert!(game.core().legal_moves.contains(&Coord::new(0, -1, 1)));
    assert!(game.clicked(Coord::new(0, -1, 1)));

    let target = game.position(Coord::new(0, -1, 1)).unwrap();
    assert_eq!(target.piece, TzaarPiece::WhiteTotts);
    assert_eq!(target.stack_count, 1);
    assert!(game.position(Coord::new(1, -1, 0)).unwrap().piece == TzaarPiece::Empty);
    assert_eq!(game.remaining_pieces()[5], 14);
    assert_eq!(game.captured(), [1, 0]);
    assert!(!game.is_first_move());
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.current_action(), Action::First);
}

#[test]
fn later_turns_have_two_actions() {
    let mut game = TzaarGame::new(TzaarSetup::Standard, &GameOptions::default()).unwrap();
    assert!(game.clicked(Coord::new(1, -1, 0)));
    assert!(game.clicked(Coord::new(0, -1, 1)));

    let cells: Vec<Coord> = game.core().shape.cells().collect();
    let (from, to) = cells
        .iter()
        .find_map(|&at| {
            game.targets(at, Side::Black, Action::First)
                .first()
                .map(|&to| (at, to))
        })
        .expect("black can capture");
    assert!(game.clicked(from));
    assert!(game.clicked(to));

    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.current_action(), Action::Second);
    assert!(game.can_pass());
    assert!(game.pass_action());
    assert_eq!(game.current_player().side, Side::White);
    assert_eq!(game.current_action(), Action::First);
    assert_eq!(game.core().log.last().unwrap().message, "black passed.");
}

#[test]
fn passing_is_only_allowed_for_the_second_action() {
    let mut game = TzaarGame::new(TzaarSetup::Standard, &GameOptions::default()).unwrap();
    assert!(!game.can_pass());
    assert!(!game.pass_action());
    assert_eq!(game.current_player().side, Side::White);
}

#[test]
fn stronger_stacks_are_not_targets() {
    let mut game = middle_rank([3, 6, 0, 0, 0, 0, 0, 4, 5], &[(-4, 1, 6)]);
    let mut snapshot = game.export_state();
    if let Some(cell) = snapshot.base.board.get_mut(&Coord::new(-3, 3, 0)) {
        cell.stack_count = 2;
    }
    game.import_state(snapshot).unwrap();

    let targets = game.targets(Coord::new(-4, 4, 0), Side::White, Action::First);
    assert_eq!(targets, vec![Coord::new(-4, 3, 1)]);
    assert!(game.targets(Coord::new(-4, 4, 0), Side::Black, Action::First).is_empty());
}

#[test]
fn centre_blocks_sliding() {
    let game = middle_rank([0, 0, 0, 3, 0, 6, 0, 0, 0], &[(-4, 1, 1), (4, -1, 4)]);
    assert!(game
        .targets(Coord::new(-1, 1, 0), Side::White, Action::First)
        .is_empty());
}

#[test]
fn second_action_may_stack_own_pieces() {
    let mut game = past_first_move(middle_rank([3, 6, 3, 0, 0, 1, 2, 4, 5], &[(-4, 1, 6)]));
    assert!(game.clicked(Coord::new(-2, 2, 0)));
    assert!(game.clicked(Coord::new(-3, 3, 0)));
    assert_eq!(game.current_action(), Action::Second);
    assert_eq!(game.captured(), [1, 0]);

    assert!(game.clicked(Coord::new(-3, 3, 0)));
    assert!(game.core().legal_moves.contains(&Coord::new(-4, 4, 0)));
    assert!(game.clicked(Coord::new(-4, 4, 0)));

    let stack = game.position(Coord::new(-4, 4, 0)).unwrap();
    assert_eq!(stack.stack_count, 2);
    assert_eq!(stack.piece, TzaarPiece::WhiteTotts);
    assert_eq!(game.remaining_pieces(), [1, 1, 1, 1, 1, 1]);
    assert_eq!(game.captured(), [1, 0]);
    assert_eq!(game.current_player().side, Side::Black);
    assert_eq!(game.current_action(), Action::First);
}

#[test]
fn losing_the_last_piece_of_a_type_ends_the_game() {
    let mut game = middle_rank([1, 6, 2, 3, 0, 4, 5, 0, 0], &[]);
    assert!(game.clicked(Coord::new(-4, 4, 0)));
    assert!(game.clicked(Coord::new(-3, 3, 0)));

    assert_eq!(game.core().state, GameState::Completed);
    assert_eq!(game.winner(), Some(&white_player(&game)));
    let last = &game.core().log.last().unwrap().message;
    assert!(last.contains("ran out of totts"), "{last}");
    assert!(!game.clicked(Coord::new(1, -1, 0)));
}

#[test]
fn opponent_without_captures_loses() {
    let mut game = middle_rank([1, 6, 2, 3, 0, 4, 5, 6, 0], &[]);
    assert!(game.clicked(Coord::new(-4, 4, 0)));
    assert!(game.clicked(Coord::new(-3, 3, 0)));

    assert_eq!(game.core().state, GameState::Completed);
    assert_eq!(game.winner(), Some(&white_player(&game)));
    let last = &game.core().log.last().unwrap().message;
    assert!(last.contains("cannot capture"), "{last}");
}

#[test]
fn occupied_centre_is_rejected() {
    let rows = layout(&[(0, 0, 1)]);
    assert!(matches!(
        TzaarGame::from_layout(&rows, &GameOptions::default()),
        Err(GameError::MalformedLayout(_))
    ));
}

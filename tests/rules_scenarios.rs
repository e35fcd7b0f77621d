use squadro::board::{BLACK_OUTBOUND, WHITE_OUTBOUND, WHITE_RETURN};
use squadro::error::ErrorKind;
use squadro::{Board, Color, Direction, MoveResolver, Piece, RulesError};

fn place(board: &mut Board, pieces: &[((usize, usize), Piece)]) {
    for &((r, c), p) in pieces {
        board.set_piece(r, c, p).unwrap();
    }
}

#[test]
fn opening_move_on_row_three() {
    assert_eq!(WHITE_OUTBOUND[3], 2);
    let mut board = Board::new();
    let mut resolver = MoveResolver::new();
    let outcome = resolver.play_piece(&mut board, 3, 0, Color::White).unwrap();
    assert!(outcome.moved);
    assert!(!outcome.terminal);
    assert!(board.get_piece(3, 0).unwrap().is_empty());
    let moved = board.get_piece(3, 2).unwrap();
    assert_eq!(moved.color(), Color::White);
    assert_eq!(moved.direction(), Direction::East);
}

#[test]
fn white_piece_turns_around_on_column_six() {
    let mut board = Board::new();
    board.set_piece(3, 0, Piece::empty()).unwrap();
    board.set_piece(3, 4, Piece::white_east()).unwrap();
    let mut resolver = MoveResolver::new();
    let outcome = resolver.play_piece(&mut board, 3, 4, Color::White).unwrap();
    assert!(outcome.turned_around);
    assert_eq!(board.get_piece(3, 6).unwrap(), Piece::white_west());
}

#[test]
fn full_round_trip_of_one_white_piece() {
    let mut board = Board::empty();
    board.set_piece(3, 0, Piece::white_east()).unwrap();
    let mut resolver = MoveResolver::new();

    // 0 -> 2 -> 4 -> 6 (turn) -> 4 -> 2 -> 0 (exit)
    let mut col = 0;
    for _ in 0..3 {
        resolver.play_piece(&mut board, 3, col, Color::White).unwrap();
        col += WHITE_OUTBOUND[3];
    }
    assert_eq!(col, 6);
    assert_eq!(board.get_piece(3, 6).unwrap(), Piece::white_west());
    for _ in 0..2 {
        resolver.play_piece(&mut board, 3, col, Color::White).unwrap();
        col -= WHITE_RETURN[3];
    }
    let outcome = resolver.play_piece(&mut board, 3, col, Color::White).unwrap();
    assert!(outcome.exited);
    assert_eq!(resolver.exit_count(Color::White), 1);
    assert_eq!(board.pieces(Color::White).count(), 0);
}

#[test]
fn four_exits_win_and_freeze_the_game() {
    let mut board = Board::empty();
    let mut resolver = MoveResolver::new();
    for lane in 1..=4 {
        let start = WHITE_RETURN[lane];
        board.set_piece(lane, start, Piece::white_west()).unwrap();
        let outcome = resolver.play_piece(&mut board, lane, start, Color::White).unwrap();
        assert!(outcome.exited);
        assert_eq!(outcome.terminal, lane == 4);
    }
    assert_eq!(resolver.exit_count(Color::White), 4);
    assert!(resolver.has_won(Color::White));
    assert!(!resolver.has_won(Color::Black));

    place(&mut board, &[((6, 2), Piece::black_north())]);
    let frozen = board;
    let outcome = resolver.play_piece(&mut board, 6, 2, Color::Black).unwrap();
    assert!(!outcome.moved);
    assert!(outcome.terminal);
    assert_eq!(board, frozen);
}

#[test]
fn outbound_black_on_path_goes_to_row_zero_of_its_column() {
    // White on row 2 moves 3: (2, 0) -> (2, 3) crossing (2, 1) and (2, 2).
    let mut board = Board::empty();
    place(
        &mut board,
        &[((2, 0), Piece::white_east()), ((2, 2), Piece::black_north())],
    );
    let mut resolver = MoveResolver::new();
    let outcome = resolver.play_piece(&mut board, 2, 0, Color::White).unwrap();
    assert_eq!(outcome.bumps.len(), 1);
    assert_eq!(board.get_piece(0, 2).unwrap(), Piece::black_north());
    assert!(board.get_piece(2, 2).unwrap().is_empty());
    assert_eq!(board.get_piece(2, 3).unwrap(), Piece::white_east());
}

#[test]
fn each_bumped_piece_uses_its_own_leg() {
    // Black on column 5 moves 3: (6, 5) -> (3, 5) over rows 5 and 4.
    assert_eq!(BLACK_OUTBOUND[5], 3);
    let mut board = Board::empty();
    place(
        &mut board,
        &[
            ((6, 5), Piece::black_north()),
            ((5, 5), Piece::white_west()),
            ((4, 5), Piece::white_east()),
        ],
    );
    let mut resolver = MoveResolver::new();
    let outcome = resolver.play_piece(&mut board, 6, 5, Color::Black).unwrap();
    assert_eq!(outcome.bumps.len(), 2);
    assert_eq!(board.get_piece(5, 6).unwrap(), Piece::white_west());
    assert_eq!(board.get_piece(4, 0).unwrap(), Piece::white_east());
    assert_eq!(board.get_piece(3, 5).unwrap(), Piece::black_north());
}

#[test]
fn moving_black_on_white_turn_is_an_ownership_error() {
    let mut board = Board::new();
    let mut resolver = MoveResolver::new();
    let err = resolver.play_piece(&mut board, 6, 1, Color::White).unwrap_err();
    assert!(matches!(err, RulesError::NotOwner { .. }));
    assert_eq!(err.kind(), ErrorKind::Contract);
    assert_eq!(board, Board::new());
}

#[test]
fn off_board_destination_is_an_illegal_move() {
    let mut board = Board::empty();
    // Column 1 outbound speed 3 from row 2 would reach row -1.
    board.set_piece(2, 1, Piece::black_north()).unwrap();
    let snapshot = board;
    let mut resolver = MoveResolver::new();
    let err = resolver.play_piece(&mut board, 2, 1, Color::Black).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalMove);
    assert_eq!(board, snapshot);
}

#[test]
fn destination_occupied_by_opponent_is_bumped_not_rejected() {
    // White on row 1 moves 1: (1, 2) -> (1, 3), where an outbound black waits.
    let mut board = Board::empty();
    place(
        &mut board,
        &[((1, 2), Piece::white_east()), ((1, 3), Piece::black_north())],
    );
    let mut resolver = MoveResolver::new();
    let outcome = resolver.play_piece(&mut board, 1, 2, Color::White).unwrap();
    assert!(outcome.moved);
    assert_eq!(board.get_piece(1, 3).unwrap(), Piece::white_east());
    assert_eq!(board.get_piece(0, 3).unwrap(), Piece::black_north());
}

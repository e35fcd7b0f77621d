use proptest::prelude::*;

use squadro::board::{LAST, SIZE};
use squadro::playout::play_random_game;
use squadro::{Board, Color, Direction, GameSession, Piece};

fn any_piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        Just(Piece::empty()),
        Just(Piece::neutral()),
        Just(Piece::white_east()),
        Just(Piece::white_west()),
        Just(Piece::black_north()),
        Just(Piece::black_south()),
    ]
}

fn mobility() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::East),
        Just(Direction::South),
        Just(Direction::West),
    ]
}

fn is_corner(r: usize, c: usize) -> bool {
    (r == 0 || r == LAST) && (c == 0 || c == LAST)
}

fn assert_board_invariants(board: &Board) {
    for r in 0..SIZE {
        for c in 0..SIZE {
            let piece = board.get_piece(r, c).unwrap();
            assert_eq!(piece.color() == Color::Neutral, is_corner(r, c), "cell ({r}, {c})");
        }
    }
    assert!(board.pieces(Color::White).count() <= 5);
    assert!(board.pieces(Color::Black).count() <= 5);
    for (r, _) in board.pieces(Color::White) {
        assert!((1..=5).contains(&r), "white piece left its lane: row {r}");
    }
    for (_, c) in board.pieces(Color::Black) {
        assert!((1..=5).contains(&c), "black piece left its lane: column {c}");
    }
}

proptest! {
    #[test]
    fn set_then_get_returns_the_piece(row in 0..SIZE, col in 0..SIZE, piece in any_piece()) {
        let mut board = Board::new();
        board.set_piece(row, col, piece).unwrap();
        prop_assert_eq!(board.get_piece(row, col).unwrap(), piece);
    }

    #[test]
    fn out_of_range_always_fails(row in SIZE..100usize, col in 0..100usize) {
        let mut board = Board::new();
        prop_assert!(board.get_piece(row, col).is_err());
        prop_assert!(board.get_piece(col % SIZE, row).is_err());
        prop_assert!(board.set_piece(row, col, Piece::empty()).is_err());
        prop_assert_eq!(board, Board::new());
    }

    #[test]
    fn reversal_is_an_involution(direction in mobility()) {
        let back = direction.reversed().unwrap().reversed().unwrap();
        prop_assert_eq!(back, direction);
        prop_assert_ne!(direction.reversed().unwrap(), direction);
    }

    #[test]
    fn reachable_boards_round_trip_through_json(max_moves in 0u32..120) {
        let result = play_random_game(GameSession::new(), max_moves).unwrap();
        let board = *result.session.board();
        let restored = Board::from_json(&board.to_json().unwrap()).unwrap();
        prop_assert_eq!(restored, board);
    }

    #[test]
    fn random_play_preserves_board_invariants(max_moves in 0u32..300) {
        let result = play_random_game(GameSession::new(), max_moves).unwrap();
        let session = &result.session;
        assert_board_invariants(session.board());
        let on_board = session.board().pieces(Color::White).count() as u32;
        prop_assert_eq!(on_board + session.exit_count(Color::White), 5);
        let on_board = session.board().pieces(Color::Black).count() as u32;
        prop_assert_eq!(on_board + session.exit_count(Color::Black), 5);
    }
}

#[test]
fn sentinels_cannot_be_reversed() {
    assert!(Direction::Empty.reversed().is_err());
    assert!(Direction::Neutral.reversed().is_err());
}

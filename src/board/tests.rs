use super::*;
use crate::error::BoardError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_stone_symbols() {
    assert_eq!(Stone::Empty.symbol(), '.');
    assert_eq!(Stone::Black.symbol(), 'X');
    assert_eq!(Stone::White.symbol(), 'O');
    assert_eq!(Stone::from_symbol('X'), Some(Stone::Black));
    assert_eq!(Stone::from_symbol('O'), Some(Stone::White));
    assert_eq!(Stone::from_symbol('.'), Some(Stone::Empty));
    assert_eq!(Stone::from_symbol('|'), None);
    assert_eq!(Player::White.stone().player(), Some(Player::White));
    assert_eq!(Stone::Empty.player(), None);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(15, 15).unwrap();
    assert_eq!(board.rows(), 15);
    assert_eq!(board.columns(), 15);
    for row in 0..15 {
        for col in 0..15 {
            assert_eq!(board.get(row, col), Ok(Stone::Empty));
        }
    }
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        Board::new(0, 15),
        Err(BoardError::InvalidDimension { rows: 0, columns: 15 })
    );
    assert!(Board::new(15, 0).is_err());
    assert!(Board::new(1, 1).is_ok());
}

#[test]
fn test_oversized_dimensions_rejected() {
    assert_eq!(
        Board::new(100_000_000, 100_000_000),
        Err(BoardError::InvalidDimension {
            rows: 100_000_000,
            columns: 100_000_000
        })
    );
    assert!(Board::new(MAX_BOARD_SIZE + 1, 5).is_err());
    assert!(Board::new(5, usize::MAX).is_err());

    let board = Board::new(MAX_BOARD_SIZE, 2).unwrap();
    let last = (MAX_BOARD_SIZE - 1) as i32;
    assert_eq!(board.get(last, 1), Ok(Stone::Empty));
}

#[test]
fn test_set_and_get() {
    let mut board = Board::default();
    board.set(7, 7, Stone::Black).unwrap();
    board.set(8, 8, Stone::White).unwrap();
    assert_eq!(board.get(7, 7), Ok(Stone::Black));
    assert_eq!(board.get(8, 8), Ok(Stone::White));
    assert!(!board.is_empty(7, 7));
    assert!(board.is_empty(5, 5));

    // Unchecked overwrite, including back to empty
    board.set(7, 7, Stone::White).unwrap();
    assert_eq!(board.get(7, 7), Ok(Stone::White));
    board.set(7, 7, Stone::Empty).unwrap();
    assert!(board.is_empty(7, 7));
}

#[test]
fn test_out_of_bounds_access() {
    let mut board = Board::default();
    assert!(matches!(board.get(-1, 0), Err(BoardError::OutOfBounds { .. })));
    assert!(matches!(board.get(0, 15), Err(BoardError::OutOfBounds { .. })));
    assert!(board.set(15, 0, Stone::Black).is_err());
    assert!(!board.is_empty(20, 20));
    assert!(board.is_board_empty());
}

#[test]
fn test_position_validity() {
    let board = Board::default();
    assert!(board.is_valid_position(0, 0));
    assert!(board.is_valid_position(14, 14));
    assert!(board.is_valid_position(7, 7));
    assert!(!board.is_valid_position(-1, 0));
    assert!(!board.is_valid_position(0, -1));
    assert!(!board.is_valid_position(15, 0));
    assert!(!board.is_valid_position(0, 15));
    assert!(!board.is_valid_position(20, 20));
}

#[test]
fn test_rectangular_board() {
    let board = Board::new(10, 20).unwrap();
    assert!(board.is_valid_position(9, 19));
    assert!(!board.is_valid_position(10, 19));
    assert!(!board.is_valid_position(9, 20));
    assert_eq!(board.cell_count(), 200);
}

#[test]
fn test_clear() {
    let mut board = Board::default();
    board.set(0, 0, Stone::Black).unwrap();
    board.set(14, 14, Stone::White).unwrap();
    board.clear();
    assert!(board.is_board_empty());
    assert_eq!(board.rows(), 15);
    assert_eq!(board.columns(), 15);
}

#[test]
fn test_is_full_and_empty_positions() {
    let mut board = Board::new(2, 2).unwrap();
    assert_eq!(board.empty_positions().count(), 4);
    board.set(0, 0, Stone::Black).unwrap();
    board.set(1, 1, Stone::White).unwrap();
    let empty: Vec<Pos> = board.empty_positions().collect();
    assert_eq!(empty, vec![Pos::new(0, 1), Pos::new(1, 0)]);
    assert!(!board.is_full());

    board.set(0, 1, Stone::Black).unwrap();
    board.set(1, 0, Stone::White).unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_positions().count(), 0);
    assert_eq!(board.stone_count(), 4);
}

#[test]
fn test_serialize_empty_board_shape() {
    for (rows, columns) in [(1, 1), (5, 5), (3, 7), (15, 15)] {
        let board = Board::new(rows, columns).unwrap();
        let s = board.serialize();
        assert_eq!(s.matches('|').count(), rows - 1);
        assert_eq!(s.matches('.').count(), rows * columns);
        assert_eq!(s.len(), rows * columns + rows - 1);
        assert!(!s.ends_with('|'));
    }
}

#[test]
fn test_serialize_format() {
    let mut board = Board::new(3, 3).unwrap();
    board.set(0, 0, Stone::Black).unwrap();
    board.set(1, 1, Stone::White).unwrap();
    board.set(2, 2, Stone::Black).unwrap();
    assert_eq!(board.serialize(), "X..|.O.|..X");
}

#[test]
fn test_round_trip() {
    let mut board = Board::new(6, 9).unwrap();
    let placements = [
        (0, 0, Stone::Black),
        (0, 8, Stone::White),
        (5, 0, Stone::White),
        (5, 8, Stone::Black),
        (3, 4, Stone::Black),
        (2, 7, Stone::White),
    ];
    for (r, c, s) in placements {
        board.set(r, c, s).unwrap();
    }

    let mut restored = Board::new(6, 9).unwrap();
    restored.deserialize(&board.serialize());
    assert_eq!(restored, board);
}

#[test]
fn test_deserialize_empty_string_is_noop() {
    let mut board = Board::new(3, 3).unwrap();
    board.set(1, 1, Stone::Black).unwrap();
    board.deserialize("");
    assert_eq!(board.get(1, 1), Ok(Stone::Black));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_deserialize_ignores_excess() {
    let mut board = Board::new(2, 2).unwrap();
    board.deserialize("XOX|OXO|XXX");
    assert_eq!(board.serialize(), "XO|OX");
}

#[test]
fn test_deserialize_short_input_keeps_previous_cells() {
    let mut board = Board::new(3, 3).unwrap();
    board.set(2, 2, Stone::White).unwrap();
    board.set(0, 2, Stone::White).unwrap();
    board.deserialize("XX");
    assert_eq!(board.serialize(), "XXO|...|..O");
}

#[test]
fn test_deserialize_skips_unknown_symbols() {
    let mut board = Board::new(1, 3).unwrap();
    board.set(0, 1, Stone::White).unwrap();
    board.deserialize("X?X");
    assert_eq!(board.serialize(), "XOX");
}

#[test]
fn test_render_contains_indices_and_stones() {
    let mut board = Board::new(3, 3).unwrap();
    board.set(0, 0, Stone::Black).unwrap();
    board.set(2, 1, Stone::White).unwrap();
    assert_eq!(board.render(), "  0 1 2\n0 X . .\n1 . . .\n2 . O .\n");
}

#[test]
fn test_render_aligns_wide_boards() {
    let board = Board::new(11, 11).unwrap();
    let rendered = board.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines[0].ends_with("10"));
    assert!(lines[11].starts_with("10"));
    assert_eq!(lines[1].len(), lines[11].len());
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(4, 1)));
    assert_eq!(pos.offset(-1, 0, 3), None);
    assert_eq!(pos.offset(0, -1, 4), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

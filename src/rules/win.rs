//! Win condition checking
//!
//! A player wins by making a run of five or more of their stones along any of
//! the four axes. Overlines count. Only the lines through the stone just
//! placed are scanned, so a check costs O(board dimension).

use crate::board::{Board, Pos, Stone};

/// Run length needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `stone`s from `pos` along `(dr, dc)`, excluding `pos`.
///
/// Stops at the board edge or at the first cell holding anything else.
pub fn count_in_direction(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    let mut count = 0;
    let mut dist = 1;
    while let Some(next) = pos.offset(dr, dc, dist) {
        if board.stone_at(next) != Some(stone) {
            break;
        }
        count += 1;
        dist += 1;
    }
    count
}

/// Length of the run through `pos` along one axis, including `pos` itself
#[inline]
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    count_in_direction(board, pos, dr, dc, stone) + count_in_direction(board, pos, -dr, -dc, stone) + 1
}

/// Fast five-in-a-row check at a specific position.
///
/// Uses the stone currently at `pos`; an empty or off-board cell never wins.
/// Stops at the first qualifying axis.
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    let stone = match board.stone_at(pos) {
        Some(Stone::Empty) | None => return false,
        Some(stone) => stone,
    };
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc, stone) >= WIN_LENGTH)
}

/// Positions of the winning run through `pos`, ordered from one end to the other.
///
/// Returns the full run (which may be longer than five), or `None` if no axis
/// through `pos` qualifies.
pub fn find_five_line_at_pos(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let stone = board.stone_at(pos).filter(|&s| s != Stone::Empty)?;

    for &(dr, dc) in &DIRECTIONS {
        let back = count_in_direction(board, pos, -dr, -dc, stone) as i32;
        let forward = count_in_direction(board, pos, dr, dc, stone) as i32;
        if (back + forward + 1) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .filter_map(|dist| pos.offset(dr, dc, dist))
                .collect();
            return Some(line);
        }
    }
    None
}

/// Check if no empty cell remains
#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

//! Game rules for standard Gomoku
//!
//! Five or more in a row wins; a full board without a winner is a draw.
//! No forbidden moves and no captures.

pub mod win;

// Re-exports for convenient access
pub use win::{
    count_in_direction, find_five_line_at_pos, has_five_at_pos, is_board_full, run_length,
    DIRECTIONS, WIN_LENGTH,
};

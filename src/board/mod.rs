//! Board representation for Gomoku

pub mod board;
mod codec;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Largest accepted row or column count
pub const MAX_BOARD_SIZE: usize = 1000;

/// Row separator in the serialized board format
pub const ROW_DELIMITER: char = '|';

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Symbol used by both the serialized format and the text rendering
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }

    /// Parse a serialized cell symbol
    #[inline]
    pub fn from_symbol(c: char) -> Option<Stone> {
        match c {
            '.' => Some(Stone::Empty),
            'X' => Some(Stone::Black),
            'O' => Some(Stone::White),
            _ => None,
        }
    }

    /// Owning player, `None` for an empty cell
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Stone::Black => Some(Player::Black),
            Stone::White => Some(Player::White),
            Stone::Empty => None,
        }
    }
}

/// A side in the game. Black (`X`) always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Stone this player places
    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        self.stone().symbol()
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `dist` cells along `(dr, dc)`; `None` when a coordinate goes negative
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, dist: i32) -> Option<Pos> {
        let r = self.row as i64 + (dr * dist) as i64;
        let c = self.col as i64 + (dc * dist) as i64;
        if r < 0 || c < 0 {
            return None;
        }
        Some(Pos::new(r as usize, c as usize))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

//! Board structure: a fixed-size grid of cells with no game rules

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::BoardError;

/// Game board
///
/// Cells are stored row-major. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty `rows` x `columns` board.
    ///
    /// Fails with [`BoardError::InvalidDimension`] if either dimension is zero
    /// or larger than [`MAX_BOARD_SIZE`].
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        let valid = 1..=MAX_BOARD_SIZE;
        if !valid.contains(&rows) || !valid.contains(&columns) {
            return Err(BoardError::InvalidDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![Stone::Empty; rows * columns],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the coordinate lies on the board.
    ///
    /// Takes signed values so callers can probe off-board neighbours.
    #[inline]
    pub fn is_valid_position(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Check if position lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.columns
    }

    /// Get stone at position
    pub fn get(&self, row: i32, col: i32) -> Result<Stone, BoardError> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Overwrite a cell. No legality check is made; editing tools use this to
    /// bypass game rules.
    pub fn set(&mut self, row: i32, col: i32, stone: Stone) -> Result<(), BoardError> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[idx] = stone;
        Ok(())
    }

    /// Stone at `pos`, `None` when off the board
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Option<Stone> {
        if self.contains(pos) {
            Some(self.cells[pos.row * self.columns + pos.col])
        } else {
            None
        }
    }

    /// Place a stone at an on-board position. Off-board positions are ignored.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        if self.contains(pos) {
            self.cells[pos.row * self.columns + pos.col] = stone;
        }
    }

    /// Check if position is empty. Off-board positions are never empty.
    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Ok(Stone::Empty))
    }

    /// Reset every cell to empty; dimensions are unchanged
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Stone::Empty)
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board has no stones
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| Pos::new(row, col)))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions()
            .filter(move |&pos| self.stone_at(pos) == Some(Stone::Empty))
    }

    /// Cells of one row, in column order
    pub(crate) fn row_cells(&self, row: usize) -> &[Stone] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.rows && col < self.columns {
            Some(row * self.columns + col)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, row: i32, col: i32) -> BoardError {
        BoardError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            columns: self.columns,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            columns: DEFAULT_BOARD_SIZE,
            cells: vec![Stone::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

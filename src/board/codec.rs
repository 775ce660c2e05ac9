//! Text encodings of a board
//!
//! - [`Board::serialize`] / [`Board::deserialize`]: the persistence format.
//!   Row-major symbols (`.`, `X`, `O`), rows joined by `|`, no trailing
//!   separator. This must round-trip exactly.
//! - [`Board::render`]: a grid with row/column indices, for display only.

use std::fmt;

use super::{Board, Stone, ROW_DELIMITER};

impl Board {
    /// Encode the grid as a single line
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.cell_count() + self.rows());
        for row in 0..self.rows() {
            if row > 0 {
                out.push(ROW_DELIMITER);
            }
            out.extend(self.row_cells(row).iter().map(|s| s.symbol()));
        }
        out
    }

    /// Load cells from the serialized format.
    ///
    /// Rows and characters beyond the board's dimensions are ignored. Missing
    /// rows or characters, and unrecognised symbols, leave the existing cell
    /// untouched; call [`Board::clear`] first for a clean load. Never fails.
    pub fn deserialize(&mut self, data: &str) {
        if data.is_empty() {
            return;
        }
        for (row, line) in data.split(ROW_DELIMITER).take(self.rows()).enumerate() {
            for (col, c) in line.chars().take(self.columns()).enumerate() {
                if let Some(stone) = Stone::from_symbol(c) {
                    self.place_stone(super::Pos::new(row, col), stone);
                }
            }
        }
    }

    /// Human-readable grid with index headers
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_w = digits(self.rows().saturating_sub(1));
        let col_w = digits(self.columns().saturating_sub(1));

        // Column headers
        write!(f, "{:row_w$}", "")?;
        for col in 0..self.columns() {
            write!(f, " {col:>col_w$}")?;
        }
        writeln!(f)?;

        for row in 0..self.rows() {
            write!(f, "{row:>row_w$}")?;
            for stone in self.row_cells(row) {
                write!(f, " {:>col_w$}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn digits(mut n: usize) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

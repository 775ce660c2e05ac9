//! Error types shared across the engine and its collaborators

use std::path::PathBuf;

/// Errors raised by [`Board`](crate::Board) construction and cell access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(
        "invalid board dimensions {rows}x{columns}: each must be between 1 and {max}",
        max = crate::board::MAX_BOARD_SIZE
    )]
    InvalidDimension { rows: usize, columns: usize },

    #[error("position ({row}, {col}) is outside the {rows}x{columns} board")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        columns: usize,
    },
}

/// Reasons a move is rejected by [`GameService`](crate::GameService).
///
/// A rejected move never changes the board or the turn; callers are expected
/// to ask for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },
}

impl MoveError {
    /// True for rule violations on a well-formed coordinate
    /// (occupied cell or a move after the game ended).
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::GameOver | MoveError::Occupied { .. })
    }
}

/// Errors that can occur while saving or loading boards.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("stored board '{name}' has unusable dimensions: {source}")]
    CorruptBoard { name: String, source: BoardError },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

//! Five-in-a-row (Gomoku) game engine
//!
//! Two players alternately place stones on a rectangular grid; the first to
//! make an unbroken line of five or more stones horizontally, vertically or
//! diagonally wins. A full board without such a line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: the grid of cells and its text encodings, no rules
//! - [`rules`]: directional run counting and the five-in-a-row check
//! - [`game`]: [`GameService`], the turn/terminal-state machine
//! - [`player`]: random computer opponent
//! - [`store`]: SQLite persistence of named boards
//! - [`config`]: TOML configuration
//! - [`console`] and [`ui`]: text and graphical front ends
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, GameService, MoveOutcome, Player};
//!
//! let mut game = GameService::new(Board::new(15, 15).unwrap());
//! for col in 0..4 {
//!     game.attempt_move(7, col).unwrap(); // Black
//!     game.attempt_move(8, col).unwrap(); // White
//! }
//! assert_eq!(game.attempt_move(7, 4), Ok(MoveOutcome::Win(Player::Black)));
//! assert!(game.attempt_move(0, 0).is_err());
//! ```
//!
//! # Serialized boards
//!
//! ```
//! use gomoku::{Board, Stone};
//!
//! let mut board = Board::new(2, 3).unwrap();
//! board.set(0, 1, Stone::Black).unwrap();
//! board.set(1, 2, Stone::White).unwrap();
//! assert_eq!(board.serialize(), ".X.|..O");
//!
//! let mut copy = Board::new(2, 3).unwrap();
//! copy.deserialize(&board.serialize());
//! assert_eq!(copy, board);
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod store;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use config::AppConfig;
pub use error::{BoardError, ConfigError, MoveError, StoreError};
pub use game::{GameService, GameStatus, MoveOutcome};
pub use player::ComputerPlayer;
pub use store::BoardStore;

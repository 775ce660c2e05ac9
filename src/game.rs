//! Game service: turn order, move legality and terminal-state detection
//!
//! [`GameService`] owns exactly one [`Board`]. Every successful placement is
//! followed by a win check centred on the placed stone, then (only if that
//! fails) a full-board draw check. A win on the move that fills the last cell
//! is reported as a win, not a draw.

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Player, Pos, Stone};
use crate::error::MoveError;
use crate::rules;

/// Game progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of a successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game continues; `next` is now to move
    Continue { next: Player },
    /// The mover completed five in a row
    Win(Player),
    /// The board filled up without a winner
    Draw,
}

/// Rules engine for a single game
#[derive(Debug, Clone)]
pub struct GameService {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Pos>,
    move_count: usize,
}

impl GameService {
    /// Start a game on `board`. Black moves first regardless of the board's
    /// existing contents.
    pub fn new(board: Board) -> Self {
        info!(
            rows = board.rows(),
            columns = board.columns(),
            "New game service created"
        );
        Self {
            board,
            current_player: Player::Black,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for editing tools. Changes made here bypass the
    /// rules and do not affect turn or terminal state.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winning player. `None` both while in progress and after a draw; use
    /// [`is_game_over`](Self::is_game_over) to tell them apart.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Position of the most recent successful placement
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Successful placements since the last reset or rebind
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Attempt to place the current player's stone at `(row, col)`.
    ///
    /// Rejections leave board, turn and status untouched.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn attempt_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over() {
            warn!("Attempted move after game over");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_valid_position(row, col) {
            warn!(row, col, "Invalid position");
            return Err(MoveError::OutOfBounds { row, col });
        }

        if !self.board.is_empty(row, col) {
            warn!(row, col, "Position already occupied");
            return Err(MoveError::Occupied { row, col });
        }

        Ok(self.execute_move(Pos::new(row as usize, col as usize)))
    }

    /// [`attempt_move`](Self::attempt_move) for an unsigned position
    pub fn play(&mut self, pos: Pos) -> Result<MoveOutcome, MoveError> {
        let row = i32::try_from(pos.row).unwrap_or(i32::MAX);
        let col = i32::try_from(pos.col).unwrap_or(i32::MAX);
        self.attempt_move(row, col)
    }

    /// Place the stone and advance the state machine. `pos` must be empty.
    fn execute_move(&mut self, pos: Pos) -> MoveOutcome {
        let player = self.current_player;
        self.board.place_stone(pos, player.stone());
        self.last_move = Some(pos);
        self.move_count += 1;
        info!(player = player.name(), row = pos.row, col = pos.col, "Stone placed");

        if rules::has_five_at_pos(&self.board, pos) {
            self.status = GameStatus::Won(player);
            info!(player = player.name(), "Player wins");
            return MoveOutcome::Win(player);
        }

        if rules::is_board_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game ended in a draw");
            return MoveOutcome::Draw;
        }

        self.current_player = player.opponent();
        debug!(next = self.current_player.name(), "Turn passes");
        MoveOutcome::Continue {
            next: self.current_player,
        }
    }

    /// Stones of the winning run, if the game was won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        match self.status {
            GameStatus::Won(_) => self
                .last_move
                .and_then(|pos| rules::find_five_line_at_pos(&self.board, pos)),
            _ => None,
        }
    }

    /// Would a move at `pos` be accepted right now
    pub fn is_legal(&self, pos: Pos) -> bool {
        !self.is_game_over() && self.board.stone_at(pos) == Some(Stone::Empty)
    }

    /// Clear the board and start over with Black to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.reset_state();
        info!("Game reset");
    }

    /// Swap in a different board (e.g. one just loaded) and start a new game
    /// on it, keeping its contents. Returns the previous board.
    pub fn rebind(&mut self, board: Board) -> Board {
        let previous = std::mem::replace(&mut self.board, board);
        self.reset_state();
        info!(
            rows = self.board.rows(),
            columns = self.board.columns(),
            "Game service rebound to new board"
        );
        previous
    }

    fn reset_state(&mut self) {
        self.current_player = Player::Black;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.move_count = 0;
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

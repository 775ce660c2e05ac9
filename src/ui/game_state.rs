//! Game state management for the Gomoku GUI

use tracing::warn;

use crate::{Board, ComputerPlayer, GameService, MoveError, Player, Pos};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs computer
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human: Player::Black,
        }
    }
}

/// Main game state
pub struct GameState {
    pub service: GameService,
    pub mode: GameMode,
    pub message: Option<String>,
    computer: ComputerPlayer,
}

impl GameState {
    pub fn new(mode: GameMode, board: Board, computer: ComputerPlayer) -> Self {
        Self {
            service: GameService::new(board),
            mode,
            message: None,
            computer,
        }
    }

    /// Clear the board and start over in the current mode
    pub fn reset(&mut self) {
        self.service.reset();
        self.message = None;
    }

    /// Start a new game in `mode` on an empty board of the same size
    pub fn new_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.service.current_player() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if the computer should move now
    pub fn is_computer_turn(&self) -> bool {
        !self.service.is_game_over() && !self.is_human_turn()
    }

    /// Attempt to place a stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.service.play(pos).map_err(|e| match e {
            MoveError::GameOver => "Game is over".to_string(),
            other => other.to_string(),
        })?;
        self.message = None;
        Ok(())
    }

    /// Let the computer move if it is its turn
    pub fn play_computer_turn(&mut self) {
        if !self.is_computer_turn() {
            return;
        }
        let Some(pos) = self.computer.select_move(self.service.board()) else {
            self.message = Some("Computer could not find a move".to_string());
            return;
        };
        if let Err(e) = self.service.play(pos) {
            warn!(error = %e, "Computer move rejected");
            self.message = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mode: GameMode) -> GameState {
        GameState::new(mode, Board::new(9, 9).unwrap(), ComputerPlayer::with_seed(5))
    }

    #[test]
    fn test_pvp_both_sides_human() {
        let mut state = state(GameMode::PvP);
        assert!(state.try_place_stone(Pos::new(0, 0)).is_ok());
        assert!(state.is_human_turn());
        assert!(state.try_place_stone(Pos::new(1, 1)).is_ok());
        assert_eq!(state.service.move_count(), 2);
    }

    #[test]
    fn test_pve_computer_answers() {
        let mut state = state(GameMode::PvE {
            human: Player::Black,
        });
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        assert!(state.is_computer_turn());
        assert_eq!(
            state.try_place_stone(Pos::new(0, 0)),
            Err("Not your turn".to_string())
        );

        state.play_computer_turn();
        assert_eq!(state.service.move_count(), 2);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_computer_opens_when_human_is_white() {
        let mut state = state(GameMode::PvE {
            human: Player::White,
        });
        assert!(state.is_computer_turn());
        state.play_computer_turn();
        assert_eq!(state.service.move_count(), 1);
        assert_eq!(state.service.current_player(), Player::White);
    }

    #[test]
    fn test_occupied_reports_message() {
        let mut state = state(GameMode::PvP);
        state.try_place_stone(Pos::new(2, 2)).unwrap();
        let err = state.try_place_stone(Pos::new(2, 2)).unwrap_err();
        assert!(err.contains("occupied"));
    }

    #[test]
    fn test_new_game_switches_mode_and_clears() {
        let mut state = state(GameMode::PvP);
        state.try_place_stone(Pos::new(2, 2)).unwrap();
        state.new_game(GameMode::PvE {
            human: Player::White,
        });
        assert!(state.service.board().is_board_empty());
        assert_eq!(state.service.current_player(), Player::Black);
        assert!(state.is_computer_turn());
    }
}

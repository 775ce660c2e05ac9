//! Automated opponent that picks uniformly at random among empty cells

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::board::{Board, Pos};

/// Random move source. Each instance owns its RNG, so games stay independent
/// and a fixed seed gives a reproducible sequence.
pub struct ComputerPlayer {
    rng: StdRng,
}

impl ComputerPlayer {
    pub fn new() -> Self {
        ComputerPlayer {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        ComputerPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Pick an empty cell, or `None` if the board is full
    pub fn select_move(&mut self, board: &Board) -> Option<Pos> {
        let moves: Vec<Pos> = board.empty_positions().collect();
        if moves.is_empty() {
            warn!("No available moves for computer player");
            return None;
        }
        let pos = moves[self.rng.random_range(0..moves.len())];
        info!(row = pos.row, col = pos.col, "Computer selected move");
        Some(pos)
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::game::GameService;

    #[test]
    fn test_selects_empty_cell_on_empty_board() {
        let mut player = ComputerPlayer::new();
        let board = Board::default();
        let pos = player.select_move(&board).unwrap();
        assert!(board.contains(pos));
        assert_eq!(board.stone_at(pos), Some(Stone::Empty));
    }

    #[test]
    fn test_selects_only_remaining_cell() {
        let mut board = Board::new(3, 3).unwrap();
        board.deserialize("XOX|O.O|XOX");
        let mut player = ComputerPlayer::with_seed(7);
        for _ in 0..20 {
            assert_eq!(player.select_move(&board), Some(Pos::new(1, 1)));
        }
    }

    #[test]
    fn test_partial_board_moves_are_empty() {
        let mut board = Board::new(5, 5).unwrap();
        board.deserialize("XXXXX|OOOOO|X.X.X|.....|OXOXO");
        let mut player = ComputerPlayer::with_seed(1);
        for _ in 0..100 {
            let pos = player.select_move(&board).unwrap();
            assert_eq!(board.stone_at(pos), Some(Stone::Empty));
        }
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new(2, 2).unwrap();
        board.deserialize("XO|OX");
        let mut player = ComputerPlayer::new();
        assert_eq!(player.select_move(&board), None);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let board = Board::default();
        let mut a = ComputerPlayer::with_seed(42);
        let mut b = ComputerPlayer::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }

    #[test]
    fn test_plays_full_game() {
        let mut black = ComputerPlayer::with_seed(3);
        let mut white = ComputerPlayer::with_seed(4);
        let mut service = GameService::new(Board::new(7, 7).unwrap());

        let mut turns = 0;
        while !service.is_game_over() {
            let mover = if turns % 2 == 0 { &mut black } else { &mut white };
            let pos = mover.select_move(service.board()).unwrap();
            service.play(pos).unwrap();
            turns += 1;
        }

        assert!(turns <= 49);
        assert!(service.is_game_over());
    }
}

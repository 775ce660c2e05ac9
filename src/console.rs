//! Menu-driven text front end
//!
//! Reads commands line by line from any [`BufRead`] and writes prompts and
//! boards to any [`Write`], so whole sessions can be scripted in tests.
//! End of input leaves the menu cleanly.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{error, info};

use crate::board::{Board, Player, Stone};
use crate::config::{AppConfig, BoardConfig};
use crate::game::{GameService, GameStatus};
use crate::player::ComputerPlayer;
use crate::store::BoardStore;

/// Interactive console session
pub struct Console<R, W> {
    input: R,
    output: W,
    board_config: BoardConfig,
    service: Option<GameService>,
    store: Option<BoardStore>,
    computer: ComputerPlayer,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `store` is optional; without it the save/load/list entries report
    /// that storage is unavailable.
    pub fn new(input: R, output: W, config: &AppConfig, store: Option<BoardStore>) -> Self {
        Console {
            input,
            output,
            board_config: config.board.clone(),
            service: None,
            store,
            computer: ComputerPlayer::from_seed_option(config.computer.seed),
        }
    }

    /// Current game, if a board has been created or loaded
    pub fn service(&self) -> Option<&GameService> {
        self.service.as_ref()
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n   WELCOME TO GO-MOKU\n      Five in a Row\n")?;

        loop {
            self.show_main_menu()?;
            let Some(choice) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.create_new_board()?,
                "2" => self.load_board()?,
                "3" => {
                    if self.service.is_some() {
                        self.play_game()?
                    } else {
                        self.no_board_error()?
                    }
                }
                "4" => {
                    if self.service.is_some() {
                        self.edit_board()?
                    } else {
                        self.no_board_error()?
                    }
                }
                "5" => {
                    if self.service.is_some() {
                        self.save_board()?
                    } else {
                        self.no_board_error()?
                    }
                }
                "6" => self.list_saved_boards()?,
                "7" => {
                    writeln!(self.output, "Thanks for playing! Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice! Please enter 1-7")?,
            }
        }
    }

    fn show_main_menu(&mut self) -> io::Result<()> {
        let ready = if self.service.is_some() { " (ready)" } else { "" };
        writeln!(self.output, "   MAIN MENU")?;
        writeln!(self.output, "1. Create New Board")?;
        writeln!(self.output, "2. Load Saved Board")?;
        writeln!(self.output, "3. Play Game{ready}")?;
        writeln!(self.output, "4. Edit Board (place stones manually)")?;
        writeln!(self.output, "5. Save Current Board")?;
        writeln!(self.output, "6. List Saved Boards")?;
        writeln!(self.output, "7. Exit")?;
        self.prompt("Choose (1-7): ")
    }

    fn no_board_error(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "No board! Create one (1) or load one (2) first."
        )
    }

    fn create_new_board(&mut self) -> io::Result<()> {
        let BoardConfig {
            rows,
            columns,
            min_size,
            max_size,
        } = self.board_config;

        self.prompt(&format!("Enter board size (default {rows}x{columns}): "))?;
        let input = self.read_line()?.unwrap_or_default();

        let (rows, columns) = if input.is_empty() {
            (rows, columns)
        } else {
            match input.parse::<usize>() {
                Ok(size) if size < min_size => {
                    writeln!(
                        self.output,
                        "Minimum size is {min_size}x{min_size}! Using {rows}x{columns}."
                    )?;
                    (rows, columns)
                }
                Ok(size) if size > max_size => {
                    writeln!(
                        self.output,
                        "Maximum size is {max_size}x{max_size}! Using {rows}x{columns}."
                    )?;
                    (rows, columns)
                }
                Ok(size) => (size, size),
                Err(_) => {
                    writeln!(self.output, "Not a number! Using {rows}x{columns}.")?;
                    (rows, columns)
                }
            }
        };

        match Board::new(rows, columns) {
            Ok(board) => {
                writeln!(self.output, "New {rows}x{columns} board created!")?;
                write!(self.output, "{board}")?;
                self.install(board);
            }
            Err(e) => writeln!(self.output, "Could not create board: {e}")?,
        }
        Ok(())
    }

    /// Start a fresh game on `board`, reusing the existing service if any
    fn install(&mut self, board: Board) {
        match self.service.as_mut() {
            Some(service) => {
                service.rebind(board);
            }
            None => self.service = Some(GameService::new(board)),
        }
    }

    fn load_board(&mut self) -> io::Result<()> {
        self.prompt("Enter saved game name: ")?;
        let name = self.read_line()?.unwrap_or_default();
        if name.is_empty() {
            return Ok(());
        }

        let Some(store) = self.store.as_ref() else {
            return self.storage_unavailable();
        };

        match store.load(&name) {
            Ok(Some(board)) => {
                writeln!(self.output, "Board '{name}' loaded successfully!")?;
                write!(self.output, "{board}")?;
                self.install(board);
            }
            Ok(None) => writeln!(self.output, "No board found with name: {name}")?,
            Err(e) => {
                error!(error = %e, "Failed to load board");
                writeln!(self.output, "Load failed: {e}")?;
            }
        }
        Ok(())
    }

    fn play_game(&mut self) -> io::Result<()> {
        self.prompt("Play against Computer? (y/n): ")?;
        let Some(answer) = self.read_line()? else {
            return Ok(());
        };
        let vs_computer = answer.eq_ignore_ascii_case("y");

        loop {
            let Some(service) = self.service.as_mut() else {
                return Ok(());
            };
            if service.is_game_over() {
                break;
            }
            if service.board().is_full() {
                writeln!(self.output, "The board is full, no moves left.")?;
                return Ok(());
            }

            write!(self.output, "{}", service.board())?;
            let player = service.current_player();

            if vs_computer && player == Player::White {
                writeln!(self.output, "Computer (O) is thinking...")?;
                let Some(pos) = self.computer.select_move(service.board()) else {
                    return Ok(());
                };
                if service.play(pos).is_ok() {
                    writeln!(self.output, "Computer played: {} {}", pos.row, pos.col)?;
                }
                continue;
            }

            self.prompt(&format!("Player {} -> enter row col: ", player.symbol()))?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 2 {
                writeln!(self.output, "Please enter two numbers (e.g. 2 2)")?;
                continue;
            }
            let (Ok(row), Ok(col)) = (parts[0].parse::<i32>(), parts[1].parse::<i32>()) else {
                writeln!(self.output, "Please enter numbers only!")?;
                continue;
            };

            let result = match self.service.as_mut() {
                Some(service) => service.attempt_move(row, col),
                None => return Ok(()),
            };
            if let Err(e) = result {
                writeln!(self.output, "Invalid! {e}. Try again.")?;
            }
        }

        self.announce_result()?;

        self.prompt("\nSave this game? (y/n): ")?;
        if let Some(answer) = self.read_line()? {
            if answer.eq_ignore_ascii_case("y") {
                self.save_board()?;
            }
        }
        Ok(())
    }

    fn announce_result(&mut self) -> io::Result<()> {
        let Some(service) = self.service.as_ref() else {
            return Ok(());
        };
        write!(self.output, "{}", service.board())?;
        let message = match service.status() {
            GameStatus::Won(Player::Black) => "PLAYER X WINS!".to_string(),
            GameStatus::Won(Player::White) => "PLAYER O WINS!".to_string(),
            GameStatus::Draw => "IT'S A DRAW!".to_string(),
            GameStatus::InProgress => format!("Game paused after {} moves.", service.move_count()),
        };
        info!(result = %message, "Game finished");
        writeln!(self.output, "{message}")
    }

    fn edit_board(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Edit mode - type: row col X   or   row col O   or   row col .   (or 'done')"
        )?;

        loop {
            self.prompt("> ")?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.eq_ignore_ascii_case("done") {
                return Ok(());
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 3 {
                writeln!(self.output, "Format: row col X/O/.")?;
                continue;
            }

            let row = parts[0].parse::<i32>();
            let col = parts[1].parse::<i32>();
            let stone = parts[2]
                .chars()
                .next()
                .and_then(|c| Stone::from_symbol(c.to_ascii_uppercase()));

            let (Ok(row), Ok(col)) = (row, col) else {
                writeln!(self.output, "Invalid input!")?;
                continue;
            };
            let Some(stone) = stone else {
                writeln!(self.output, "Use X, O, or . only")?;
                continue;
            };

            let Some(service) = self.service.as_mut() else {
                return Ok(());
            };
            match service.board_mut().set(row, col, stone) {
                Ok(()) => write!(self.output, "{}", service.board())?,
                Err(e) => writeln!(self.output, "Invalid input! {e}")?,
            }
        }
    }

    fn save_board(&mut self) -> io::Result<()> {
        self.prompt("Save as (name): ")?;
        let mut name = self.read_line()?.unwrap_or_default();
        if name.is_empty() {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default();
            name = format!("save_{millis}");
        }

        let (Some(store), Some(service)) = (self.store.as_ref(), self.service.as_ref()) else {
            return self.storage_unavailable();
        };

        match store.save(&name, service.board()) {
            Ok(()) => writeln!(self.output, "Game saved as: {name}"),
            Err(e) => {
                error!(error = %e, "Failed to save board");
                writeln!(self.output, "Save failed!")
            }
        }
    }

    fn list_saved_boards(&mut self) -> io::Result<()> {
        let Some(store) = self.store.as_ref() else {
            return self.storage_unavailable();
        };

        let names = match store.list() {
            Ok(names) => names,
            Err(e) => {
                error!(error = %e, "Failed to list boards");
                Vec::new()
            }
        };

        writeln!(self.output, "\nSaved Boards ({}):", names.len())?;
        if names.is_empty() {
            writeln!(self.output, "   (none)")?;
        } else {
            for (i, name) in names.iter().enumerate() {
                writeln!(self.output, "   {}. {}", i + 1, name)?;
            }
        }
        writeln!(self.output)
    }

    fn storage_unavailable(&mut self) -> io::Result<()> {
        writeln!(self.output, "Board storage is unavailable.")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Next trimmed line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

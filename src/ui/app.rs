//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::{AppConfig, Board, ComputerPlayer, GameStatus, Player};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    /// Create the app with a board sized from `config`
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let board = Board::new(config.board.rows, config.board.columns).unwrap_or_default();
        let computer = ComputerPlayer::from_seed_option(config.computer.seed);
        Self {
            state: GameState::new(GameMode::default(), board, computer),
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.state.new_game(GameMode::PvE { human: Player::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.state.new_game(GameMode::PvE { human: Player::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {}", human.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.state.service.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let board = self.state.service.board();
            ui.label(
                RichText::new(format!("Five in a row - {}x{}", board.rows(), board.columns()))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        card(CARD_BG, 8, 12.0).show(ui, |ui| {
            let player = self.state.service.current_player();
            let (stone_color, accent) = match player {
                Player::Black => (BLACK_STONE, BLACK_STONE_HIGHLIGHT),
                Player::White => (WHITE_STONE, WHITE_STONE_SHADOW),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().circle_filled(rect.center(), 18.0, stone_color);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = format!("{} ({})", player.name().to_uppercase(), player.symbol());
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.service.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", STATUS_ACTIVE)
                    } else {
                        ("Computer to move", STATUS_WARNING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        card(CARD_BG, 8, 12.0).show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            card(BUTTON_BG, 6, 8.0).show(ui, |ui| {
                let label = egui::Label::new(RichText::new("New Game (N)").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(label).clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            let count = self.state.service.move_count();
            ui.label(RichText::new(format!("Move #{count}")).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render game over card
    fn render_game_over_card(&self, ui: &mut egui::Ui) {
        let (headline, detail, fill) = match self.state.service.status() {
            GameStatus::Won(player) => (
                format!("{} WINS!", player.name().to_uppercase()),
                "by five in a row",
                WIN_CARD_BG,
            ),
            _ => ("DRAW".to_string(), "the board is full", DRAW_CARD_BG),
        };

        card(fill, 8, 16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(GAME_OVER_LABEL));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        card(MESSAGE_CARD_BG, 8, 10.0).show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = CENTRAL_BG;

            let winning_line = self.state.service.winning_line();
            let overlay = BoardOverlay {
                current_turn: self.state.service.current_player(),
                last_move: self.state.service.last_move(),
                winning_line: winning_line.as_deref(),
                accepts_input: !self.state.service.is_game_over() && self.state.is_human_turn(),
            };

            let clicked = self.board_view.show(ui, self.state.service.board(), &overlay);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The random opponent answers immediately
        self.state.play_computer_turn();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

//! Board rendering for the Gomoku GUI

use crate::{Board, Player, Pos, Stone};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    rows: usize,
    columns: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            rows: 0,
            columns: 0,
        }
    }
}

/// What the view needs to know besides the board itself
pub struct BoardOverlay<'a> {
    pub current_turn: Player,
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    pub accepts_input: bool,
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        self.rows = board.rows();
        self.columns = board.columns();

        let available = ui.available_size() - Vec2::splat(20.0);
        let span_x = (self.columns.max(2) - 1) as f32;
        let span_y = (self.rows.max(2) - 1) as f32;
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / span_x)
            .min((available.y - 2.0 * BOARD_MARGIN) / span_y)
            .max(8.0);

        let size = Vec2::new(
            2.0 * BOARD_MARGIN + (self.columns - 1) as f32 * self.cell_size,
            2.0 * BOARD_MARGIN + (self.rows - 1) as f32 * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_center_point(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_pos = None;

        if overlay.accepts_input {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = board.stone_at(board_pos) == Some(Stone::Empty);
                self.draw_hover_preview(&painter, board_pos, overlay.current_turn, is_valid);

                if response.clicked() && is_valid {
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let width = (self.columns - 1) as f32 * self.cell_size;
        let height = (self.rows - 1) as f32 * self.cell_size;

        for col in 0..self.columns {
            let x = BOARD_MARGIN + col as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(x, BOARD_MARGIN);
            painter.line_segment([start, start + Vec2::new(0.0, height)], stroke);
        }

        for row in 0..self.rows {
            let y = BOARD_MARGIN + row as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, y);
            painter.line_segment([start, start + Vec2::new(width, 0.0)], stroke);
        }
    }

    /// Mark the centre intersection on odd-sized boards
    fn draw_center_point(&self, painter: &Painter) {
        if self.rows % 2 == 1 && self.columns % 2 == 1 {
            let center = self.board_to_screen(Pos::new(self.rows / 2, self.columns / 2));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw row and column indices, matching the console's `row col` input
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.columns {
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + 14.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, col.to_string(), font.clone(), GRID_LINE);
        }

        for row in 0..self.rows {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + 14.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row.to_string(), font.clone(), GRID_LINE);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            if let Some(player) = board.stone_at(pos).and_then(Stone::player) {
                self.draw_stone(painter, pos, player);
            }
        }
    }

    /// Draw a single stone
    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Player::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = match (is_valid, turn) {
            (false, _) => hover_invalid(),
            (true, Player::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Player::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (col, row) = (x.floor() as usize, y.floor() as usize);
        (row < self.rows && col < self.columns).then(|| Pos::new(row, col))
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

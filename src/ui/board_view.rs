//! Board rendering for the GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Grid size of the board last drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            size: crate::BOARD_SIZE,
        }
    }
}

/// Star points: center, plus the 4-4 points and edge midpoints on large boards.
fn star_points(size: usize) -> Vec<Pos> {
    let mid = (size / 2) as u8;
    if size < 13 {
        return vec![Pos::new(mid, mid)];
    }
    let far = (size - 4) as u8;
    let lines = [3, mid, far];
    lines
        .iter()
        .flat_map(|&r| lines.iter().map(move |&c| Pos::new(r, c)))
        .collect()
}

impl BoardView {
    /// Render the board and return click position if any.
    ///
    /// Clicks are only reported when `interactive` is set and the target is
    /// playable for the side to move.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        suggested_move: Option<Pos>,
        winning_line: Option<[Pos; 5]>,
        interactive: bool,
    ) -> Option<Pos> {
        self.size = board.size();
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / (self.size.max(2) as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = board.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }
        if let Some(pos) = suggested_move {
            self.draw_suggestion(&painter, pos, board.side_to_move());
        }

        if !interactive {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let (row, col) = (i32::from(board_pos.row), i32::from(board_pos.col));
        let is_valid = board.is_empty(board_pos) && !board.is_forbidden(row, col);
        self.draw_hover_preview(&painter, board_pos, board.side_to_move(), is_valid);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    fn grid_extent(&self) -> f32 {
        (self.size as f32 - 1.0) * self.cell_size
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = self.grid_extent();

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for pos in star_points(self.size) {
            painter.circle_filled(self.board_to_screen(pos), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters along the top and bottom, row numbers counting up from the bottom.
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.size {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            for y in [self.board_rect.min.y + 8.0, self.board_rect.max.y - 12.0] {
                painter.text(Pos2::new(x - 4.0, y), egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
            }
        }

        for row in 0..self.size {
            let label = format!("{}", self.size - row);
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            for x in [self.board_rect.min.x + 12.0, self.board_rect.max.x - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.occupied() {
            self.draw_stone(painter, pos, board.get(pos));
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty | Stone::OutOfBounds => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Translucent stone with a "?" where the hint suggests playing.
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let (fill, mark) = match turn {
            Stone::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_STONE),
            Stone::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_STONE),
            _ => return,
        };

        painter.circle_filled(center, radius, fill);
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(14.0), mark);
    }

    /// Ghost stone under the pointer; red when the cell cannot be played.
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let color = match (is_valid, turn) {
            (false, _) => hover_invalid(),
            (true, Stone::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Stone::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            (true, _) => return,
        };
        painter.circle_filled(self.board_to_screen(pos), self.cell_size * STONE_RADIUS_RATIO, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;

        let n = self.size as i32;
        (col >= 0 && col < n && row >= 0 && row < n).then(|| Pos::new(row as u8, col as u8))
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + f32::from(pos.col) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + f32::from(pos.row) * self.cell_size;
        Pos2::new(x, y)
    }
}

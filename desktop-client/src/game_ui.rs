use eframe::egui;
use tictactoe_engine::game::{BOARD_SIZE, Board, Mark, Position, WinningLine};

use crate::colors;

pub struct BoardUi {
    last_hover: Option<Position>,
}

impl BoardUi {
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const GRID_LINE_WIDTH: f32 = 2.0;
    const MARK_LINE_WIDTH: f32 = 4.0;
    const STRIKE_OUT_WIDTH: f32 = 8.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = available_width.min(available_height) / BOARD_SIZE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    // Returns the cell the player clicked, if the board is interactive and
    // the cell is still empty.
    pub fn render_board(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        interactive: bool,
        winning_line: Option<WinningLine>,
    ) -> Option<Position> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * BOARD_SIZE as f32;

        let sense = if interactive {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(egui::vec2(board_side, board_side), sense);

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, colors::BOARD_BACKGROUND);

        for i in 0..=BOARD_SIZE {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(Self::GRID_LINE_WIDTH, colors::MARKS),
            );
        }

        for i in 0..=BOARD_SIZE {
            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(Self::GRID_LINE_WIDTH, colors::MARKS),
            );
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell_rect = egui::Rect::from_min_size(
                    egui::pos2(
                        rect.left() + col as f32 * cell_size,
                        rect.top() + row as f32 * cell_size,
                    ),
                    egui::vec2(cell_size, cell_size),
                );

                match board.mark_at(Position::new(row, col)) {
                    Mark::X => self.draw_x(painter, cell_rect),
                    Mark::O => self.draw_o(painter, cell_rect),
                    Mark::Empty => {}
                }
            }
        }

        let mut clicked_cell = None;

        if interactive {
            if let Some(hover_pos) = response.hover_pos() {
                let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
                let row = ((hover_pos.y - rect.top()) / cell_size) as usize;

                if row < BOARD_SIZE
                    && col < BOARD_SIZE
                    && board.mark_at(Position::new(row, col)) == Mark::Empty
                {
                    let hover_rect = egui::Rect::from_min_size(
                        egui::pos2(
                            rect.left() + col as f32 * cell_size,
                            rect.top() + row as f32 * cell_size,
                        ),
                        egui::vec2(cell_size, cell_size),
                    );

                    painter.rect_filled(hover_rect, 0.0, colors::hover_fill());

                    self.last_hover = Some(Position::new(row, col));
                } else {
                    self.last_hover = None;
                }
            } else {
                self.last_hover = None;
            }

            if response.clicked()
                && let Some(pos) = self.last_hover
            {
                clicked_cell = Some(pos);
            }
        }

        if let Some(line) = winning_line {
            let start_pos = egui::pos2(
                rect.left() + (line.start.col as f32 + 0.5) * cell_size,
                rect.top() + (line.start.row as f32 + 0.5) * cell_size,
            );
            let end_pos = egui::pos2(
                rect.left() + (line.end.col as f32 + 0.5) * cell_size,
                rect.top() + (line.end.row as f32 + 0.5) * cell_size,
            );
            painter.line_segment(
                [start_pos, end_pos],
                egui::Stroke::new(Self::STRIKE_OUT_WIDTH, colors::STRIKE_OUT),
            );
        }

        clicked_cell
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_LINE_WIDTH, colors::MARKS);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let center = rect.center();
        let radius = (rect.width() / 2.0) - padding;

        painter.circle_stroke(
            center,
            radius,
            egui::Stroke::new(Self::MARK_LINE_WIDTH, colors::MARKS),
        );
    }
}

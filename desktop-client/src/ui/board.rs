use egui::{pos2, vec2, Rect, Sense, Ui};
use snake_common::games::snake::Frame;

use crate::colors;

/// Allocates the board area and paints `frame` into it. Returns the board rect.
pub fn render_board(ui: &mut Ui, board_size: u32, cell_size: f32, frame: Option<&Frame>) -> Rect {
    let side = board_size as f32 * cell_size;
    let (response, painter) = ui.allocate_painter(vec2(side, side), Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 8.0, colors::BOARD_BACKGROUND);

    let Some(frame) = frame else {
        return rect;
    };

    let cell_rect = |x: i32, y: i32| {
        Rect::from_min_size(
            pos2(
                rect.min.x + x as f32 * cell_size,
                rect.min.y + y as f32 * cell_size,
            ),
            vec2(cell_size, cell_size),
        )
    };

    for (i, segment) in frame.body.iter().enumerate() {
        painter.rect_filled(
            cell_rect(segment.x, segment.y),
            0.0,
            colors::segment_color(i, frame.body.len()),
        );
    }

    painter.rect_filled(cell_rect(frame.food.x, frame.food.y), 0.0, colors::FOOD);

    rect
}

use egui::{Context, Rect, Ui};
use snake_common::games::snake::GameMode;

use crate::colors;

struct OverlayText {
    title: &'static str,
    button: &'static str,
    accent: egui::Color32,
}

fn overlay_text(mode: GameMode) -> Option<OverlayText> {
    match mode {
        GameMode::Playing => None,
        GameMode::Start => Some(OverlayText {
            title: "Snake Game",
            button: "Start Game",
            accent: colors::START_ACCENT,
        }),
        GameMode::Won => Some(OverlayText {
            title: "You Win",
            button: "Play Again",
            accent: colors::WON_ACCENT,
        }),
        GameMode::Lost => Some(OverlayText {
            title: "Game Over",
            button: "Try Again",
            accent: colors::LOST_ACCENT,
        }),
    }
}

/// Draws the overlay for non-playing modes over `board_rect`.
/// Returns `true` when its action was chosen.
pub fn render_overlay(ui: &mut Ui, ctx: &Context, board_rect: Rect, mode: GameMode) -> bool {
    let Some(text) = overlay_text(mode) else {
        return false;
    };

    let area = board_rect.shrink2(board_rect.size() / 12.0);
    let mut clicked = false;

    ui.scope_builder(egui::UiBuilder::new().max_rect(area), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(area.height() / 6.0);
            egui::Frame::new()
                .fill(egui::Color32::from_gray(64))
                .stroke(egui::Stroke::new(2.0, text.accent))
                .corner_radius(4.0)
                .inner_margin(24.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(text.title)
                            .color(text.accent)
                            .size(48.0)
                            .strong(),
                    );
                });

            ui.add_space(area.height() / 6.0);
            let button = egui::Button::new(egui::RichText::new(text.button).size(18.0))
                .fill(text.accent)
                .min_size(egui::vec2(area.width() / 2.0, 36.0));
            if ui.add(button).clicked() {
                clicked = true;
            }
            ui.label("Enter");
        });
    });

    clicked || ctx.input(|i| i.key_pressed(egui::Key::Enter))
}

pub const BOARD_BACKGROUND: egui::Color32 = egui::Color32::BLACK;
pub const FOOD: egui::Color32 = egui::Color32::from_rgb(220, 20, 20);

pub const START_ACCENT: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
pub const WON_ACCENT: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
pub const LOST_ACCENT: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

/// Segment color by position: the head is the brightest green, the tail the darkest.
pub fn segment_color(index: usize, length: usize) -> egui::Color32 {
    let t = index as f32 / length.max(1) as f32;
    let g = (150.0 - t * 80.0).round() as u8;
    let b = (t * 20.0).round() as u8;
    egui::Color32::from_rgb(0, g, b)
}

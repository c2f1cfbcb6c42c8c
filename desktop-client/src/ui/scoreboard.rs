pub fn render_scoreboard(ui: &mut egui::Ui, score: u32, high_score: u32) {
    egui::Frame::new()
        .fill(egui::Color32::BLACK)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.columns(2, |columns| {
                score_column(&mut columns[0], "Score", score);
                score_column(&mut columns[1], "High Score", high_score);
            });
        });
}

fn score_column(ui: &mut egui::Ui, title: &str, value: u32) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(title).size(20.0));
        ui.separator();
        ui.label(egui::RichText::new(value.to_string()).size(32.0).strong());
    });
}

// src/ui/hero.rs
use eframe::egui;

use super::ACCENT;

const ICON_SIZE: f32 = 64.0;

pub fn show_hero(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        brain_icon(ui, ICON_SIZE, ACCENT);
        ui.add_space(16.0);
        ui.label(egui::RichText::new("Fake News Detection").size(44.0).strong());
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Powered by Machine Learning and Natural Language Processing")
                .size(20.0)
                .color(egui::Color32::LIGHT_GRAY)
        );
    });
    ui.add_space(32.0);
}

// The bundled fonts have no brain glyph, so the outline is painted.
fn brain_icon(ui: &mut egui::Ui, size: f32, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();
    let stroke = egui::Stroke::new(size / 16.0, color);
    let c = rect.center();
    let r = size * 0.5;

    // Two hemispheres, each built from a front and a back lobe.
    for side in [-1.0, 1.0] {
        painter.circle_stroke(c + egui::vec2(side * r * 0.38, -r * 0.28), r * 0.42, stroke);
        painter.circle_stroke(c + egui::vec2(side * r * 0.42, r * 0.22), r * 0.38, stroke);
        painter.line_segment(
            [c + egui::vec2(side * r * 0.2, -r * 0.05), c + egui::vec2(side * r * 0.6, r * 0.05)],
            stroke,
        );
    }
    painter.line_segment([c + egui::vec2(0.0, -r * 0.75), c + egui::vec2(0.0, r * 0.65)], stroke);
}

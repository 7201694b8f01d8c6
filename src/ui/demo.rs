// src/ui/demo.rs
use eframe::egui;

use crate::analysis::{AnalysisResult, Classification, Classifier};
use crate::state::DemoState;

const FAKE_COLOR: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);
const GENUINE_COLOR: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
const TRACK_COLOR: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
const BAR_HEIGHT: f32 = 16.0;

/// Everything the result block needs to draw, derived from a single result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: egui::Color32,
    pub bar_fraction: f32,
    pub percent_text: String,
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        let (icon, label, color) = match result.classification {
            Classification::PotentiallyFake => ("⚠", "Potentially Fake News", FAKE_COLOR),
            Classification::Genuine => ("✔", "Likely Genuine News", GENUINE_COLOR),
        };

        Self {
            icon,
            label,
            color,
            bar_fraction: result.confidence.clamp(0.0, 1.0) as f32,
            percent_text: format!("Confidence: {}", result.confidence_percent()),
        }
    }
}

pub fn show_demo_section(ui: &mut egui::Ui, state: &mut DemoState, classifier: &mut dyn Classifier) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .rounding(8.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading("Try it yourself");
            ui.add_space(12.0);

            let mut text = state.input_text().to_owned();
            let response = ui.add(
                egui::TextEdit::multiline(&mut text)
                    .hint_text("Paste news article text here...")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY)
            );
            if response.changed() {
                state.set_input_text(text);
            }

            ui.add_space(12.0);

            let analyze = ui.add_enabled(
                state.can_analyze(),
                egui::Button::new(egui::RichText::new("Analyze Text").strong())
                    .min_size(egui::vec2(140.0, 32.0))
            );
            if analyze.clicked() {
                state.analyze(classifier);
            }

            if let Some(result) = state.result() {
                ui.add_space(20.0);
                show_result(ui, &ResultView::from(result));
            }
        });
}

fn show_result(ui: &mut egui::Ui, view: &ResultView) {
    egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(view.icon).size(22.0).color(view.color));
                ui.label(egui::RichText::new(view.label).size(20.0).strong());
            });

            ui.add_space(8.0);
            confidence_bar(ui, view.bar_fraction, view.color);
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new(&view.percent_text)
                    .small()
                    .color(egui::Color32::LIGHT_GRAY)
            );
        });
}

fn confidence_bar(ui: &mut egui::Ui, fraction: f32, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), BAR_HEIGHT),
        egui::Sense::hover(),
    );
    let rounding = BAR_HEIGHT / 2.0;
    let painter = ui.painter();
    painter.rect_filled(rect, rounding, TRACK_COLOR);

    let filled = egui::Rect::from_min_size(
        rect.min,
        egui::vec2(rect.width() * fraction, rect.height()),
    );
    painter.rect_filled(filled, rounding, color);
}

// src/ui/overview.rs
use eframe::egui;

use super::ACCENT;

pub const BULLET: &str = "•";

pub struct TechColumn {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: [&'static str; 3],
}

pub const TECH_COLUMNS: [TechColumn; 3] = [
    TechColumn {
        icon: "🖥",
        title: "ML/NLP Stack",
        items: ["Logistic Regression", "TF-IDF Vectorization", "LSTM Neural Networks"],
    },
    TechColumn {
        icon: "🗄",
        title: "Libraries Used",
        items: ["NLTK", "Scikit-learn", "TensorFlow"],
    },
    TechColumn {
        icon: "🖧",
        title: "Deployment",
        items: ["Flask Backend", "Streamlit Dashboard", "RESTful API"],
    },
];

pub fn show_overview(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Technical Overview").size(30.0).strong());
    });
    ui.add_space(24.0);

    ui.columns(TECH_COLUMNS.len(), |columns| {
        for (ui, column) in columns.iter_mut().zip(TECH_COLUMNS.iter()) {
            egui::Frame::group(ui.style())
                .fill(ui.visuals().faint_bg_color)
                .rounding(8.0)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(column.icon).size(28.0).color(ACCENT));
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(column.title).size(18.0).strong());
                    ui.add_space(8.0);
                    for item in column.items {
                        ui.label(
                            egui::RichText::new(format!("{} {}", BULLET, item))
                                .color(egui::Color32::LIGHT_GRAY)
                        );
                    }
                });
        }
    });
}

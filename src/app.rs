// src/app.rs
use eframe::egui;

use crate::analysis::Classifier;
use crate::state::AppState;
use crate::ui;

pub struct DemoApp {
    state: AppState,
    classifier: Box<dyn Classifier>,
    repository_url: String,
}

impl DemoApp {
    pub fn new(classifier: Box<dyn Classifier>, repository_url: impl Into<String>) -> Self {
        Self {
            state: AppState::new(),
            classifier,
            repository_url: repository_url.into(),
        }
    }

    /// Surfaces a problem found before the window opened.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.state.error_message = Some(message.into());
        self
    }

    fn show_page(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width().min(ui::CONTENT_WIDTH);
        let margin = ((ui.available_width() - width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(margin);
            ui.vertical(|ui| {
                ui.set_width(width);

                ui::show_hero(ui);
                ui::show_demo_section(ui, &mut self.state.demo, self.classifier.as_mut());
                ui.add_space(64.0);
                ui::show_overview(ui);
                ui::show_footer(ui, &self.repository_url);
            });
        });
    }

    fn show_error_modal(&mut self, ctx: &egui::Context) {
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.show_page(ui);
                });
        });

        self.show_error_modal(ctx);
    }
}

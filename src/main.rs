// src/main.rs
use eframe::egui;
use anyhow::Result;

mod analysis;
mod app;
mod config;
mod file;
mod state;
mod telemetry;
mod ui;

use crate::analysis::{Classifier, RandomClassifier};
use crate::app::DemoApp;
use crate::config::Settings;
use crate::file::SettingsFileHandler;

fn main() -> Result<()> {
    let settings_path = Settings::default_path();
    let (settings, load_error) = match Settings::load(settings_path.as_deref()) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(format!("{:#}", e))),
    };

    telemetry::init_logging(&settings.log_level)?;
    if let Some(error) = &load_error {
        tracing::warn!(%error, "falling back to default settings");
    }

    if let Some(path) = &settings_path {
        match SettingsFileHandler::new().ensure_exists(path) {
            Ok(true) => tracing::info!(path = %path.display(), "wrote default settings"),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %format!("{:#}", e), "could not write default settings"),
        }
    }

    tracing::info!(
        title = %settings.window_title,
        width = settings.window_width,
        height = settings.window_height,
        seed = ?settings.seed,
        "starting"
    );

    let classifier: Box<dyn Classifier> = match settings.seed {
        Some(seed) => Box::new(RandomClassifier::seeded(seed)),
        None => Box::new(RandomClassifier::new()),
    };

    let mut app = DemoApp::new(classifier, settings.repository_url.clone());
    if let Some(error) = load_error {
        app = app.with_error(format!("Using default settings: {}", error));
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title(settings.window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(app)
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

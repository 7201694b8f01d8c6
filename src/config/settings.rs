// src/config/settings.rs
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "fakenews-gui";
pub const SETTINGS_FILE_NAME: &str = "settings.ron";
pub const ENV_PREFIX: &str = "FAKENEWS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: String,
    pub repository_url: String,
    /// Fixed seed for the placeholder classifier; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Fake News Detection".to_string(),
            window_width: 1024.0,
            window_height: 860.0,
            log_level: "info".to_string(),
            repository_url: "https://github.com".to_string(),
            seed: None,
        }
    }
}

impl Settings {
    /// Default location: `<config dir>/fakenews-gui/settings.ron`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Layers defaults, the optional settings file, then `FAKENEWS_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Ron).required(false));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        builder
            .build()
            .and_then(|config| config.try_deserialize::<Settings>())
            .with_context(|| match path {
                Some(path) => format!("Failed to load settings from {}", path.display()),
                None => "Failed to load settings".to_string(),
            })
    }
}

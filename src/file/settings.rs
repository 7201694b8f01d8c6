// src/file/settings.rs
use crate::config::Settings;
use std::path::Path;
use std::fs;
use anyhow::{Result, Context};

/// Writes settings files. Reading goes through `Settings::load`.
#[derive(Debug, Default)]
pub struct SettingsFileHandler;

impl SettingsFileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Writes the defaults so users have a file to edit. Existing files are left alone.
    pub fn ensure_exists(&self, path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        self.save(&Settings::default(), path)?;
        Ok(true)
    }

    pub fn save(&self, settings: &Settings, path: &Path) -> Result<()> {
        let content = ron::ser::to_string_pretty(
            settings,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(2)
        ).context("Failed to serialize settings")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

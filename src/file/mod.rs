// src/file/mod.rs
pub mod settings;

pub use settings::SettingsFileHandler;

// src/state/mod.rs
pub mod demo_state;

pub use demo_state::DemoState;

// Core application state
#[derive(Debug, Default)]
pub struct AppState {
    pub demo: DemoState,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

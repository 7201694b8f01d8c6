// src/state/demo_state.rs
use crate::analysis::{AnalysisResult, Classifier};

#[derive(Debug, Default)]
pub struct DemoState {
    input_text: String,
    result: Option<AnalysisResult>,
}

impl DemoState {
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Whitespace counts: any non-empty text enables the analyze button.
    pub fn can_analyze(&self) -> bool {
        !self.input_text.is_empty()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Callers must only invoke this when `can_analyze()` holds.
    pub fn analyze(&mut self, classifier: &mut dyn Classifier) -> &AnalysisResult {
        debug_assert!(self.can_analyze(), "analyze called with empty input");

        let result = classifier.classify(&self.input_text);
        tracing::debug!(
            classification = ?result.classification,
            confidence = result.confidence,
            input_len = self.input_text.len(),
            "text analyzed"
        );
        self.result.insert(result)
    }
}

// src/analysis/classifier.rs

use rand::rngs::StdRng;
use rand::prelude::*;
use rand_distr::{Distribution, Uniform};

/// Confidence above which a result is reported as potentially fake.
pub const FAKE_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Genuine,
    PotentiallyFake,
}

impl Classification {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > FAKE_THRESHOLD {
            Classification::PotentiallyFake
        } else {
            Classification::Genuine
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    pub classification: Classification,
    pub confidence: f64,
}

impl AnalysisResult {
    pub fn from_confidence(confidence: f64) -> Self {
        Self {
            classification: Classification::from_confidence(confidence),
            confidence,
        }
    }

    /// Confidence as a percentage with one decimal place, e.g. `"83.4%"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

/// Scores a piece of text. The demo view only ever talks to this trait,
/// so a real model can be dropped in without touching the view.
pub trait Classifier {
    fn classify(&mut self, text: &str) -> AnalysisResult;
}

/// Placeholder scorer: confidence is drawn uniformly from `[0.5, 1.0)`
/// and has no relationship to the text.
#[derive(Debug)]
pub struct RandomClassifier {
    rng: StdRng,
    offset: Uniform<f64>,
}

impl RandomClassifier {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            offset: Uniform::new(0.0, 0.5),
        }
    }
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for RandomClassifier {
    fn classify(&mut self, _text: &str) -> AnalysisResult {
        let confidence = self.offset.sample(&mut self.rng) + 0.5;
        AnalysisResult::from_confidence(confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_partition() {
        assert_eq!(Classification::from_confidence(0.5), Classification::Genuine);
        assert_eq!(Classification::from_confidence(0.7), Classification::Genuine);
        assert_eq!(Classification::from_confidence(0.7000001), Classification::PotentiallyFake);
        assert_eq!(Classification::from_confidence(0.99), Classification::PotentiallyFake);
    }

    #[test]
    fn test_random_confidence_bounds() {
        let mut classifier = RandomClassifier::seeded(7);
        for _ in 0..10_000 {
            let result = classifier.classify("Breaking news!");
            assert!(result.confidence >= 0.5 && result.confidence < 1.0);
            assert_eq!(
                result.classification == Classification::PotentiallyFake,
                result.confidence > FAKE_THRESHOLD
            );
        }
    }

    #[test]
    fn test_random_produces_both_labels() {
        let mut classifier = RandomClassifier::seeded(42);
        let results: Vec<_> = (0..1_000).map(|_| classifier.classify("x")).collect();
        assert!(results.iter().any(|r| r.classification == Classification::Genuine));
        assert!(results.iter().any(|r| r.classification == Classification::PotentiallyFake));
    }

    #[test]
    fn test_seeded_is_reproducible_and_ignores_text() {
        let mut a = RandomClassifier::seeded(123);
        let mut b = RandomClassifier::seeded(123);
        for _ in 0..50 {
            assert_eq!(a.classify("one text"), b.classify("a completely different text"));
        }
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(AnalysisResult::from_confidence(0.8342).confidence_percent(), "83.4%");
        assert_eq!(AnalysisResult::from_confidence(0.5).confidence_percent(), "50.0%");
        assert_eq!(AnalysisResult::from_confidence(0.999).confidence_percent(), "99.9%");
    }
}

// src/analysis/mod.rs
pub mod classifier;

// Re-export commonly used types
pub use classifier::{
    AnalysisResult,
    Classification,
    Classifier,
    RandomClassifier,
};

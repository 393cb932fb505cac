//! # Sentiscope
//!
//! Movie-review sentiment classification with a TF-IDF + linear SVM model
//! and a simple bias/variance diagnosis.
//!
//! ## Features
//!
//! - HTML and punctuation stripping of raw review text
//! - Seeded 80/10/10 and class-balanced 50/50 dataset splits
//! - TF-IDF features with English stop-word removal
//! - Linear SVM with L1 or L2 regularization
//! - Confusion matrices and precision/recall/F1 reports
//! - Bias/variance levels from validation and test errors

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod experiment;
pub mod ml;

pub mod prelude {
    pub use crate::analysis::TextNormalizer;
    pub use crate::config::SentimentConfig;
    pub use crate::dataset::{Dataset, ReviewRecord, split_class_balanced, split_three_way};
    pub use crate::error::{Result, SentimentError};
    pub use crate::eval::{Diagnosis, Evaluation, evaluate, evaluate_with_labels};
    pub use crate::ml::{Penalty, SentimentPipeline, SvmConfig, train, train_with_config};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

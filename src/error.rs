//! Error types for the Sentiscope library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SentimentError`] enum. Every error is fatal for the run that produced
//! it: there are no retries and no partial results.
//!
//! # Examples
//!
//! ```
//! use sentiscope::error::{Result, SentimentError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentimentError::training("Training data must contain two classes"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sentiscope operations.
#[derive(Error, Debug)]
pub enum SentimentError {
    /// I/O errors (opening the dataset or configuration file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset shape or content errors (missing columns, ...)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Splitting errors (empty partitions, ...)
    #[error("Split error: {0}")]
    Split(String),

    /// Model fitting errors
    #[error("Training error: {0}")]
    Training(String),

    /// Prediction errors
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// Evaluation errors (mismatched label sequences, ...)
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SentimentError.
pub type Result<T> = std::result::Result<T, SentimentError>;

impl SentimentError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        SentimentError::Dataset(msg.into())
    }

    /// Create a new split error.
    pub fn split<S: Into<String>>(msg: S) -> Self {
        SentimentError::Split(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        SentimentError::Training(msg.into())
    }

    /// Create a new prediction error.
    pub fn prediction<S: Into<String>>(msg: S) -> Self {
        SentimentError::Prediction(msg.into())
    }

    /// Create a new evaluation error.
    pub fn evaluation<S: Into<String>>(msg: S) -> Self {
        SentimentError::Evaluation(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SentimentError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentimentError::Analysis(msg.into())
    }
}

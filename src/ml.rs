//! Machine learning for review sentiment.
//!
//! - [`tfidf::TfIdfVectorizer`]: sparse TF-IDF features over analyzed terms
//! - [`svm::LinearSvc`]: linear maximum-margin classifier (squared hinge loss)
//! - [`pipeline::SentimentPipeline`]: a fitted vectorizer + classifier pair,
//!   produced by [`pipeline::train`]
//!
//! # Example
//!
//! ```rust,no_run
//! use sentiscope::ml::{Penalty, train};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let texts = vec!["a wonderful film".to_string(), "a dreadful film".to_string()];
//! let labels = vec!["positive".to_string(), "negative".to_string()];
//!
//! let model = train(&texts, &labels, Penalty::L2, 1.0)?;
//! let predictions = model.predict(&["wonderful acting".to_string()])?;
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod pipeline;
pub mod sparse;
pub mod svm;
pub mod tfidf;

pub use classifier::TextClassifier;
pub use pipeline::{SentimentPipeline, train, train_with_config};
pub use sparse::SparseVector;
pub use svm::{LinearSvc, Penalty, SvmConfig};
pub use tfidf::TfIdfVectorizer;

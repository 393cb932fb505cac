//! Text analysis module for Sentiscope.
//!
//! Two pipelines live here:
//!
//! - the **normalizer**, a chain of char filters that cleans raw review text
//!   before it is stored in a dataset;
//! - the **analyzer**, a tokenizer followed by token filters, which turns
//!   cleaned text into the terms counted by the TF-IDF vectorizer.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use char_filter::CharFilter;
pub use normalizer::TextNormalizer;
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;

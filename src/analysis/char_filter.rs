//! Char filter implementations for text normalization.
//!
//! Char filters rewrite a whole string before anything else looks at it. The
//! review normalizer is a fixed chain of them.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use sentiscope::analysis::char_filter::CharFilter;
//! use sentiscope::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"<.*?>", "").unwrap();
//! assert_eq!(filter.filter("a<br />b"), "ab");
//! ```

pub mod lowercase;
pub mod pattern_replace;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

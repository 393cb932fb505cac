//! Review text normalizer.
//!
//! Cleans raw review text with three char filters applied in a fixed order:
//!
//! 1. lowercase every character
//! 2. strip HTML tags (`<...>`) and HTML entities (`&name;`, `&#digits;`, `&#xhex;`)
//! 3. strip every character that is not an ASCII letter, digit or space
//!
//! Whitespace is never trimmed or collapsed.
//!
//! # Examples
//!
//! ```
//! use sentiscope::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! assert_eq!(
//!     normalizer.normalize("A <br /><br />GREAT film &amp; fun!"),
//!     "a great film  fun"
//! );
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::error::Result;

/// Matches HTML tags (non-greedy, single line) and named/decimal/hex entities.
pub const HTML_PATTERN: &str = r"<.*?>|&([a-z0-9]+|#[0-9]{1,6}|#x[0-9a-f]{1,6});";

/// Matches every character outside `[a-zA-Z0-9 ]`.
pub const SPECIAL_CHARACTERS_PATTERN: &str = r"[^a-zA-Z0-9 ]";

/// Normalizer for the free-text review column.
#[derive(Clone)]
pub struct TextNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl TextNormalizer {
    /// Create the review normalizer.
    pub fn new() -> Result<Self> {
        Ok(TextNormalizer {
            char_filters: vec![
                Arc::new(LowercaseCharFilter::new()),
                Arc::new(PatternReplaceCharFilter::new(HTML_PATTERN, "")?),
                Arc::new(PatternReplaceCharFilter::new(
                    SPECIAL_CHARACTERS_PATTERN,
                    "",
                )?),
            ],
        })
    }

    /// Normalize a single string.
    pub fn normalize(&self, text: &str) -> String {
        let mut filtered = text.to_string();
        for char_filter in &self.char_filters {
            filtered = char_filter.filter(&filtered);
        }
        filtered
    }

    /// Normalize a column of strings, keeping length and order.
    pub fn normalize_all(&self, texts: &[String]) -> Vec<String> {
        texts.iter().map(|text| self.normalize(text)).collect()
    }

    /// Get the char filters applied by this normalizer, in order.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_html_tags_and_entities() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(
            normalizer.normalize("One<br /><br />Two &quot;three&quot; &#39;four&#x27;"),
            "onetwo three four"
        );
    }

    #[test]
    fn test_lowercases_before_stripping_entities() {
        let normalizer = TextNormalizer::new().unwrap();
        // Uppercase entity names only match once lowercased.
        assert_eq!(normalizer.normalize("fish &AMP; chips"), "fish  chips");
    }

    #[test]
    fn test_removes_special_characters_without_trimming() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(
            normalizer.normalize("  It's 10/10, café!  "),
            "  its 1010 caf  "
        );
    }

    #[test]
    fn test_tag_does_not_cross_lines() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(normalizer.normalize("a <b\nc> d"), "a bc d");
    }

    #[test]
    fn test_labels_pass_through() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(normalizer.normalize("positive"), "positive");
        assert_eq!(normalizer.normalize("negative"), "negative");
    }

    #[test]
    fn test_normalize_all_keeps_order() {
        let normalizer = TextNormalizer::new().unwrap();
        let cleaned = normalizer.normalize_all(&["B!".to_string(), "<i>A</i>".to_string()]);
        assert_eq!(cleaned, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_idempotent() {
        let normalizer = TextNormalizer::new().unwrap();
        let once = normalizer.normalize("Great <b>MOVIE</b> &amp; 5/5 stars :)");
        assert_eq!(normalizer.normalize(&once), once);
    }
}

//! Review datasets.
//!
//! A [`Dataset`] is an ordered, in-memory collection of [`ReviewRecord`]s. It
//! is read once (see [`loader`]) and never mutated afterwards: cleaning and
//! splitting always produce new datasets.

pub mod loader;
pub mod split;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextNormalizer;

pub use loader::{load_csv, load_csv_from_reader};
pub use split::{BalancedSplit, DatasetSplit, split_class_balanced, split_three_way};

/// Label of a positive review.
pub const POSITIVE: &str = "positive";

/// Label of a negative review.
pub const NEGATIVE: &str = "negative";

/// A single labeled review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Review text.
    pub text: String,
    /// Sentiment label.
    pub label: String,
}

impl ReviewRecord {
    /// Create a new review record.
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        ReviewRecord {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// An ordered collection of review records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<ReviewRecord>,
}

impl Dataset {
    /// Create a dataset from records.
    pub fn new(records: Vec<ReviewRecord>) -> Self {
        Dataset { records }
    }

    /// Create a dataset from `(text, label)` pairs.
    pub fn from_pairs<I, T, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, L)>,
        T: Into<String>,
        L: Into<String>,
    {
        Dataset::new(
            pairs
                .into_iter()
                .map(|(text, label)| ReviewRecord::new(text, label))
                .collect(),
        )
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records.
    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    /// Consume the dataset and return its records.
    pub fn into_records(self) -> Vec<ReviewRecord> {
        self.records
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, ReviewRecord> {
        self.records.iter()
    }

    /// The text column.
    pub fn texts(&self) -> Vec<String> {
        self.records.iter().map(|r| r.text.clone()).collect()
    }

    /// The label column.
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.label.clone()).collect()
    }

    /// Records carrying the given label, in dataset order.
    pub fn with_label(&self, label: &str) -> Dataset {
        Dataset::new(
            self.records
                .iter()
                .filter(|r| r.label == label)
                .cloned()
                .collect(),
        )
    }

    /// Number of records per label, in sorted label order.
    pub fn label_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.label.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Return a copy with the text column cleaned by `normalizer`.
    ///
    /// The label column is cleaned too only when `normalize_labels` is set.
    pub fn normalized(&self, normalizer: &TextNormalizer, normalize_labels: bool) -> Dataset {
        Dataset::new(
            self.records
                .iter()
                .map(|r| ReviewRecord {
                    text: normalizer.normalize(&r.text),
                    label: if normalize_labels {
                        normalizer.normalize(&r.label)
                    } else {
                        r.label.clone()
                    },
                })
                .collect(),
        )
    }
}

impl FromIterator<ReviewRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = ReviewRecord>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ReviewRecord;
    type IntoIter = std::slice::Iter<'a, ReviewRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_pairs(vec![
            ("Great <b>film</b>!", POSITIVE),
            ("Awful.", NEGATIVE),
            ("Loved it", POSITIVE),
        ])
    }

    #[test]
    fn test_columns_and_counts() {
        let dataset = sample();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.labels(), vec!["positive", "negative", "positive"]);
        assert_eq!(dataset.texts()[1], "Awful.");

        let counts = dataset.label_counts();
        assert_eq!(counts.get(NEGATIVE), Some(&1));
        assert_eq!(counts.get(POSITIVE), Some(&2));
        assert_eq!(counts.keys().next().map(String::as_str), Some(NEGATIVE));
    }

    #[test]
    fn test_with_label_keeps_order() {
        let positives = sample().with_label(POSITIVE);
        assert_eq!(positives.len(), 2);
        assert_eq!(positives.records()[0].text, "Great <b>film</b>!");
        assert_eq!(positives.records()[1].text, "Loved it");
    }

    #[test]
    fn test_normalized_leaves_labels_by_default() {
        let normalizer = TextNormalizer::new().unwrap();
        let dataset = Dataset::from_pairs(vec![("Nice!", "Positive")]);

        let cleaned = dataset.normalized(&normalizer, false);
        assert_eq!(cleaned.records()[0].text, "nice");
        assert_eq!(cleaned.records()[0].label, "Positive");

        let cleaned = dataset.normalized(&normalizer, true);
        assert_eq!(cleaned.records()[0].label, "positive");
    }
}

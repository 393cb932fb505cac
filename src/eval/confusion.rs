//! Confusion matrix over string labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Confusion matrix over a fixed, ordered label set.
///
/// Element `[i][j]` counts samples whose true label is `labels[i]` and whose
/// predicted label is `labels[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    matrix: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    /// Create an all-zero matrix over `labels`.
    pub fn new(labels: Vec<String>) -> Self {
        let n = labels.len();
        Self {
            labels,
            matrix: vec![vec![0; n]; n],
        }
    }

    /// Count one `(true, predicted)` pair. Labels outside the set are ignored.
    pub(crate) fn record(&mut self, true_label: &str, predicted_label: &str) {
        if let (Some(i), Some(j)) = (self.index_of(true_label), self.index_of(predicted_label)) {
            self.matrix[i][j] += 1;
        }
    }

    /// Row/column index of a label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Labels in row/column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// The raw rows.
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Element at `[true_label][predicted_label]` by index.
    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        self.matrix[true_label][predicted_label]
    }

    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// Predicted as `class` but labeled otherwise.
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes())
            .filter(|&i| i != class)
            .map(|i| self.matrix[i][class])
            .sum()
    }

    /// Labeled `class` but predicted otherwise.
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes())
            .filter(|&j| j != class)
            .map(|j| self.matrix[class][j])
            .sum()
    }

    /// Number of samples whose true label is `class`.
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    /// Sum of the diagonal.
    pub fn correct(&self) -> usize {
        (0..self.n_classes()).map(|i| self.matrix[i][i]).sum()
    }

    /// Sum of every cell.
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Number of misclassified samples (sum of the off-diagonal cells).
    pub fn off_diagonal(&self) -> usize {
        self.total() - self.correct()
    }

    /// Fraction of correct predictions, 0.0 when empty.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.correct() as f64 / total as f64
    }
}

/// Renders like a printed integer array: `[[1 0]\n [1 2]]`, every cell
/// right-aligned to the widest count.
impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .matrix
            .iter()
            .flatten()
            .map(|count| count.to_string().len())
            .max()
            .unwrap_or(1);

        write!(f, "[")?;
        for (i, row) in self.matrix.iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for (j, count) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{count:>width$}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["negative".to_string(), "positive".to_string()]
    }

    #[test]
    fn test_counts() {
        let mut cm = ConfusionMatrix::new(labels());
        cm.record("negative", "negative");
        cm.record("positive", "negative");
        cm.record("positive", "positive");
        cm.record("positive", "positive");
        cm.record("neutral", "positive");

        assert_eq!(cm.get(0, 0), 1);
        assert_eq!(cm.get(1, 0), 1);
        assert_eq!(cm.get(1, 1), 2);
        assert_eq!(cm.total(), 4);
        assert_eq!(cm.off_diagonal(), 1);
        assert_eq!(cm.false_positives(0), 1);
        assert_eq!(cm.false_negatives(1), 1);
        assert_eq!(cm.support(1), 3);
        assert!((cm.accuracy() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let mut cm = ConfusionMatrix::new(labels());
        cm.record("negative", "negative");
        cm.record("positive", "negative");
        cm.record("positive", "positive");
        cm.record("positive", "positive");
        assert_eq!(cm.to_string(), "[[1 0]\n [1 2]]");

        for _ in 0..10 {
            cm.record("negative", "negative");
        }
        assert_eq!(cm.to_string(), "[[11  0]\n [ 1  2]]");
    }

    #[test]
    fn test_empty() {
        let cm = ConfusionMatrix::new(labels());
        assert_eq!(cm.accuracy(), 0.0);
        assert_eq!(cm.off_diagonal(), 0);
    }
}

//! Per-class precision, recall and F1.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::confusion::ConfusionMatrix;

/// Metrics of a single class (or of an average row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Classification report in the familiar precision/recall/f1/support layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// `(label, metrics)` in confusion-matrix order.
    pub classes: Vec<(String, ClassMetrics)>,
    pub accuracy: f64,
    /// Unweighted mean over classes.
    pub macro_avg: ClassMetrics,
    /// Support-weighted mean over classes.
    pub weighted_avg: ClassMetrics,
}

/// `num / den`, or 0.0 when `den` is zero.
fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den }
}

impl ClassificationReport {
    /// Derive the report from a confusion matrix.
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let classes: Vec<(String, ClassMetrics)> = cm
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let tp = cm.true_positives(i) as f64;
                let precision = ratio(tp, tp + cm.false_positives(i) as f64);
                let recall = ratio(tp, tp + cm.false_negatives(i) as f64);
                let f1 = ratio(2.0 * precision * recall, precision + recall);
                let metrics = ClassMetrics {
                    precision,
                    recall,
                    f1,
                    support: cm.support(i),
                };
                (label.clone(), metrics)
            })
            .collect();

        let total_support = cm.total();
        let n = classes.len() as f64;
        let mean = |field: fn(&ClassMetrics) -> f64| -> f64 {
            ratio(classes.iter().map(|(_, m)| field(m)).sum(), n)
        };
        let weighted = |field: fn(&ClassMetrics) -> f64| -> f64 {
            ratio(
                classes
                    .iter()
                    .map(|(_, m)| field(m) * m.support as f64)
                    .sum(),
                total_support as f64,
            )
        };

        let macro_avg = ClassMetrics {
            precision: mean(|m| m.precision),
            recall: mean(|m| m.recall),
            f1: mean(|m| m.f1),
            support: total_support,
        };
        let weighted_avg = ClassMetrics {
            precision: weighted(|m| m.precision),
            recall: weighted(|m| m.recall),
            f1: weighted(|m| m.f1),
            support: total_support,
        };

        Self {
            classes,
            accuracy: cm.accuracy(),
            macro_avg,
            weighted_avg,
        }
    }

    /// Metrics of one label.
    pub fn class(&self, label: &str) -> Option<&ClassMetrics> {
        self.classes
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, metrics)| metrics)
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|(name, _)| name.len())
            .chain(std::iter::once("weighted avg".len()))
            .max()
            .unwrap_or(12);

        let row = |f: &mut fmt::Formatter<'_>, name: &str, m: &ClassMetrics| {
            writeln!(
                f,
                "{name:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}",
                m.precision, m.recall, m.f1, m.support
            )
        };

        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for (name, metrics) in &self.classes {
            row(f, name, metrics)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        row(f, "macro avg", &self.macro_avg)?;
        row(f, "weighted avg", &self.weighted_avg)
    }
}

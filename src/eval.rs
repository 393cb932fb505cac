//! Evaluation of predicted labels against true labels.
//!
//! [`evaluate`] builds a [`ConfusionMatrix`] and a [`ClassificationReport`]
//! from two label sequences. [`diagnosis::Diagnosis`] turns the
//! validation and test matrices of a run into a bias/variance verdict.

pub mod confusion;
pub mod diagnosis;
pub mod report;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};

pub use confusion::ConfusionMatrix;
pub use diagnosis::{Diagnosis, Fit, Level};
pub use report::{ClassMetrics, ClassificationReport};

/// Confusion matrix and report of one evaluated split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub confusion_matrix: ConfusionMatrix,
    pub report: ClassificationReport,
}

/// Evaluate over the sorted union of labels found in either sequence.
pub fn evaluate(y_true: &[String], y_pred: &[String]) -> Result<Evaluation> {
    let labels: Vec<String> = y_true
        .iter()
        .chain(y_pred)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    evaluate_with_labels(y_true, y_pred, labels)
}

/// Evaluate with an explicit label order.
///
/// Pairs involving a label outside `labels` are not counted.
pub fn evaluate_with_labels(
    y_true: &[String],
    y_pred: &[String],
    labels: Vec<String>,
) -> Result<Evaluation> {
    if y_true.len() != y_pred.len() {
        return Err(SentimentError::evaluation(format!(
            "got {} true labels but {} predictions",
            y_true.len(),
            y_pred.len()
        )));
    }

    let mut confusion_matrix = ConfusionMatrix::new(labels);
    for (t, p) in y_true.iter().zip(y_pred) {
        confusion_matrix.record(t, p);
    }
    let report = ClassificationReport::from_confusion_matrix(&confusion_matrix);

    Ok(Evaluation {
        confusion_matrix,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_evaluate_example() {
        let y_true = strings(&["negative", "positive", "positive", "positive"]);
        let y_pred = strings(&["negative", "negative", "positive", "positive"]);

        let evaluation = evaluate(&y_true, &y_pred).unwrap();
        let cm = &evaluation.confusion_matrix;
        assert_eq!(cm.matrix(), &[vec![1usize, 0], vec![1, 2]]);
        assert_eq!(cm.labels(), &["negative", "positive"]);
        assert!((evaluation.report.accuracy - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_single_label_present() {
        let y = strings(&["positive", "positive"]);
        let evaluation = evaluate(&y, &y).unwrap();
        assert_eq!(evaluation.confusion_matrix.n_classes(), 1);

        let fixed = evaluate_with_labels(&y, &y, strings(&["negative", "positive"])).unwrap();
        assert_eq!(fixed.confusion_matrix.matrix(), &[vec![0usize, 0], vec![0, 2]]);
    }

    #[test]
    fn test_empty_and_mismatch() {
        let evaluation = evaluate(&[], &[]).unwrap();
        assert_eq!(evaluation.confusion_matrix.total(), 0);
        assert_eq!(evaluation.report.accuracy, 0.0);

        let result = evaluate(&strings(&["positive"]), &[]);
        assert!(matches!(result, Err(SentimentError::Evaluation(_))));
    }
}

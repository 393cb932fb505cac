//! End-to-end experiment runs.
//!
//! Both runs clean the dataset with [`TextNormalizer`], split it, train a
//! [`SentimentPipeline`] on the training partition and evaluate the held-out
//! partitions. Evaluations are computed over the model's two classes so the
//! confusion matrices are always 2x2.

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextNormalizer;
use crate::config::SentimentConfig;
use crate::dataset::{Dataset, load_csv, split_class_balanced, split_three_way};
use crate::error::Result;
use crate::eval::{Diagnosis, Evaluation, evaluate_with_labels};
use crate::ml::pipeline::{SentimentPipeline, train_with_config};

/// Result of the train/validation/test diagnosis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisRun {
    /// `(train, validation, test)` partition sizes.
    pub sizes: (usize, usize, usize),
    pub validation: Evaluation,
    pub test: Evaluation,
    pub diagnosis: Diagnosis,
}

/// Result of the class-balanced train/test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancedRun {
    /// `(train, test)` partition sizes.
    pub sizes: (usize, usize),
    pub test: Evaluation,
}

/// Load the dataset named by `config.data_path`.
pub fn load_dataset(config: &SentimentConfig) -> Result<Dataset> {
    load_csv(&config.data_path)
}

/// Split 80/10/10, train, evaluate validation and test, diagnose.
pub fn run_diagnosis(dataset: &Dataset, config: &SentimentConfig) -> Result<DiagnosisRun> {
    config.validate()?;
    let cleaned = clean(dataset, config)?;

    let split = split_three_way(&cleaned, config.split_seed)?;
    let sizes = split.sizes();
    info!(
        "Split {} reviews into train={}, validation={}, test={} (seed {})",
        cleaned.len(),
        sizes.0,
        sizes.1,
        sizes.2,
        config.split_seed
    );

    let model = train_with_config(&split.train.texts(), &split.train.labels(), &config.svm)?;
    let validation = evaluate_on(&model, &split.validation)?;
    let test = evaluate_on(&model, &split.test)?;
    let diagnosis =
        Diagnosis::from_confusion_matrices(&validation.confusion_matrix, &test.confusion_matrix);
    info!("Model fit: {}", diagnosis.fit);

    Ok(DiagnosisRun {
        sizes,
        validation,
        test,
        diagnosis,
    })
}

/// Halve each class into train/test, train, evaluate the shuffled test set.
pub fn run_balanced(dataset: &Dataset, config: &SentimentConfig) -> Result<BalancedRun> {
    config.validate()?;
    let cleaned = clean(dataset, config)?;

    let split = split_class_balanced(&cleaned, config.split_seed, config.shuffle_seed)?;
    let sizes = (split.train.len(), split.test.len());
    info!(
        "Balanced split of {} reviews: train={}, test={}",
        cleaned.len(),
        sizes.0,
        sizes.1
    );

    let model = train_with_config(&split.train.texts(), &split.train.labels(), &config.svm)?;
    let test = evaluate_on(&model, &split.test)?;

    Ok(BalancedRun { sizes, test })
}

fn clean(dataset: &Dataset, config: &SentimentConfig) -> Result<Dataset> {
    let normalizer = TextNormalizer::new()?;
    Ok(dataset.normalized(&normalizer, config.normalize_labels))
}

fn evaluate_on(model: &SentimentPipeline, data: &Dataset) -> Result<Evaluation> {
    let predictions = model.predict(&data.texts())?;
    evaluate_with_labels(&data.labels(), &predictions, model.classes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{NEGATIVE, POSITIVE};
    use crate::error::SentimentError;

    fn reviews(n_per_class: usize) -> Dataset {
        let positive = ["wonderful", "brilliant", "superb", "delightful", "moving"];
        let negative = ["dreadful", "boring", "awful", "tedious", "clumsy"];
        let mut pairs = Vec::new();
        for i in 0..n_per_class {
            pairs.push((
                format!("A <b>{}</b> film, truly {}!", positive[i % 5], positive[(i + 1) % 5]),
                POSITIVE,
            ));
            pairs.push((
                format!("A {} film; really {}.", negative[i % 5], negative[(i + 2) % 5]),
                NEGATIVE,
            ));
        }
        Dataset::from_pairs(pairs)
    }

    #[test]
    fn test_run_diagnosis() {
        let run = run_diagnosis(&reviews(10), &SentimentConfig::default()).unwrap();

        assert_eq!(run.sizes, (16, 2, 2));
        assert_eq!(run.validation.confusion_matrix.n_classes(), 2);
        assert_eq!(run.validation.confusion_matrix.total(), 2);
        assert_eq!(run.test.confusion_matrix.total(), 2);
        assert_eq!(run.diagnosis.bias, run.validation.confusion_matrix.off_diagonal());
    }

    #[test]
    fn test_run_balanced() {
        let run = run_balanced(&reviews(10), &SentimentConfig::default()).unwrap();

        assert_eq!(run.sizes, (10, 10));
        let cm = &run.test.confusion_matrix;
        assert_eq!(cm.support(0), 5);
        assert_eq!(cm.support(1), 5);
    }

    #[test]
    fn test_runs_are_reproducible() {
        let config = SentimentConfig::default();
        let a = run_diagnosis(&reviews(10), &config).unwrap();
        let b = run_diagnosis(&reviews(10), &config).unwrap();
        assert_eq!(a.diagnosis, b.diagnosis);
        assert_eq!(a.validation, b.validation);
    }

    #[test]
    fn test_too_small_dataset() {
        let tiny = Dataset::from_pairs([("great", POSITIVE)]);
        assert!(matches!(
            run_diagnosis(&tiny, &SentimentConfig::default()),
            Err(SentimentError::Split(_))
        ));
    }
}

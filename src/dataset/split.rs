//! Seeded dataset splitting.
//!
//! Two protocols are provided:
//!
//! - [`split_three_way`]: 80% train, then the remaining 20% halved into
//!   validation and test. No stratification.
//! - [`split_class_balanced`]: each label is halved independently into
//!   train/test, the halves are concatenated (negative first) and the test
//!   set alone is shuffled.
//!
//! Every partition is built from a seeded [`StdRng`], so the same dataset and
//! seed always yield the same partitions.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, NEGATIVE, POSITIVE, ReviewRecord};
use crate::error::{Result, SentimentError};

/// Seed used to shuffle the class-balanced test set.
pub const DEFAULT_SHUFFLE_SEED: u64 = 12345;

/// Train/validation/test partitions of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSplit {
    /// Training partition (about 80%).
    pub train: Dataset,
    /// Validation partition (about 10%).
    pub validation: Dataset,
    /// Test partition (about 10%).
    pub test: Dataset,
}

impl DatasetSplit {
    /// Partition sizes as `(train, validation, test)`.
    pub fn sizes(&self) -> (usize, usize, usize) {
        (self.train.len(), self.validation.len(), self.test.len())
    }
}

/// Train/test partitions with identical class balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancedSplit {
    /// Negative training half followed by positive training half.
    pub train: Dataset,
    /// Shuffled union of both test halves.
    pub test: Dataset,
}

/// Split `dataset` into train (80%), validation (10%) and test (10%).
///
/// The holdout takes `ceil(0.2 * n)` records and the test set takes
/// `ceil(0.5 * holdout)` of those, so sizes always sum to `n`.
pub fn split_three_way(dataset: &Dataset, seed: u64) -> Result<DatasetSplit> {
    let n = dataset.len();
    let n_holdout = n.div_ceil(5);
    let (train, holdout) = shuffle_split(dataset.records(), n - n_holdout, seed);

    let n_test = holdout.len().div_ceil(2);
    let (validation, test) = shuffle_split(&holdout, holdout.len() - n_test, seed);

    if train.is_empty() || validation.is_empty() || test.is_empty() {
        return Err(SentimentError::split(format!(
            "dataset of {n} records is too small for a train/validation/test split \
             (train={}, validation={}, test={})",
            train.len(),
            validation.len(),
            test.len()
        )));
    }

    debug!(
        "Three-way split with seed {seed}: train={}, validation={}, test={}",
        train.len(),
        validation.len(),
        test.len()
    );

    Ok(DatasetSplit {
        train: Dataset::new(train),
        validation: Dataset::new(validation),
        test: Dataset::new(test),
    })
}

/// Split each class 50/50 into train/test and shuffle the combined test set.
///
/// Each class contributes `floor(n / 2)` records to train and the rest to
/// test. Train order is the negative half followed by the positive half;
/// the test set is shuffled with `shuffle_seed`.
pub fn split_class_balanced(dataset: &Dataset, seed: u64, shuffle_seed: u64) -> Result<BalancedSplit> {
    let negatives = dataset.with_label(NEGATIVE);
    let positives = dataset.with_label(POSITIVE);

    let (negative_train, negative_test) = halve_class(&negatives, NEGATIVE, seed)?;
    let (positive_train, positive_test) = halve_class(&positives, POSITIVE, seed)?;

    let mut train = negative_train;
    train.extend(positive_train);

    let mut test = negative_test;
    test.extend(positive_test);
    let mut rng = StdRng::seed_from_u64(shuffle_seed);
    test.shuffle(&mut rng);

    debug!(
        "Class-balanced split with seed {seed}: train={}, test={}",
        train.len(),
        test.len()
    );

    Ok(BalancedSplit {
        train: Dataset::new(train),
        test: Dataset::new(test),
    })
}

fn halve_class(
    subset: &Dataset,
    label: &str,
    seed: u64,
) -> Result<(Vec<ReviewRecord>, Vec<ReviewRecord>)> {
    let n_train = subset.len() / 2;
    if n_train == 0 {
        return Err(SentimentError::split(format!(
            "class '{label}' has {} records; at least 2 are needed for a 50/50 split",
            subset.len()
        )));
    }
    Ok(shuffle_split(subset.records(), n_train, seed))
}

/// Shuffle `records` with a seeded RNG and cut them after `n_first`.
fn shuffle_split<T: Clone>(records: &[T], n_first: usize, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut indices: Vec<usize> = (0..records.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (first, second) = indices.split_at(n_first.min(records.len()));
    (
        first.iter().map(|&i| records[i].clone()).collect(),
        second.iter().map(|&i| records[i].clone()).collect(),
    )
}

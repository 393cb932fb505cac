//! Bias/variance heuristic from misclassification counts.
//!
//! Bias is read from the validation matrix and variance from the test matrix,
//! both as the number of misclassified samples.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::confusion::ConfusionMatrix;

/// Counts at or above this are `High`.
pub const HIGH_THRESHOLD: usize = 100;

/// Coarse magnitude of an error count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// 0 is `Low`, 1..=99 is `Medium`, 100 and above is `High`.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Level::Low,
            c if c < HIGH_THRESHOLD => Level::Medium,
            _ => Level::High,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

/// Overall fit verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fit {
    GoodFit,
    Overfit,
    Underfit,
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fit::GoodFit => write!(f, "Good Fit"),
            Fit::Overfit => write!(f, "Overfit"),
            Fit::Underfit => write!(f, "Underfit"),
        }
    }
}

/// Bias and variance levels with the resulting verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub bias: usize,
    pub variance: usize,
    pub bias_level: Level,
    pub variance_level: Level,
    pub fit: Fit,
}

impl Diagnosis {
    /// Classify raw bias and variance counts.
    ///
    /// Low/Low is a good fit and High/High an overfit; every other
    /// combination is reported as an underfit.
    pub fn from_counts(bias: usize, variance: usize) -> Self {
        let bias_level = Level::from_count(bias);
        let variance_level = Level::from_count(variance);
        let fit = match (bias_level, variance_level) {
            (Level::Low, Level::Low) => Fit::GoodFit,
            (Level::High, Level::High) => Fit::Overfit,
            _ => Fit::Underfit,
        };
        Self {
            bias,
            variance,
            bias_level,
            variance_level,
            fit,
        }
    }

    /// Bias from the validation matrix, variance from the test matrix.
    pub fn from_confusion_matrices(validation: &ConfusionMatrix, test: &ConfusionMatrix) -> Self {
        Self::from_counts(validation.off_diagonal(), test.off_diagonal())
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bias Level: {} (Value: {})", self.bias_level, self.bias)?;
        writeln!(
            f,
            "Variance Level: {} (Value: {})",
            self.variance_level, self.variance
        )?;
        write!(f, "Model Fit: {}", self.fit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(Level::from_count(0), Level::Low);
        assert_eq!(Level::from_count(1), Level::Medium);
        assert_eq!(Level::from_count(99), Level::Medium);
        assert_eq!(Level::from_count(100), Level::High);
    }

    #[test]
    fn test_verdicts() {
        let good = Diagnosis::from_counts(0, 0);
        assert_eq!(good.bias_level, Level::Low);
        assert_eq!(good.variance_level, Level::Low);
        assert_eq!(good.fit, Fit::GoodFit);

        let over = Diagnosis::from_counts(150, 150);
        assert_eq!(over.bias_level, Level::High);
        assert_eq!(over.variance_level, Level::High);
        assert_eq!(over.fit, Fit::Overfit);

        let under = Diagnosis::from_counts(50, 0);
        assert_eq!(under.bias_level, Level::Medium);
        assert_eq!(under.variance_level, Level::Low);
        assert_eq!(under.fit, Fit::Underfit);

        // Mixed High/Low is not an overfit.
        assert_eq!(Diagnosis::from_counts(0, 200).fit, Fit::Underfit);
    }

    #[test]
    fn test_from_confusion_matrices() {
        let labels = vec!["negative".to_string(), "positive".to_string()];
        let mut validation = ConfusionMatrix::new(labels.clone());
        validation.record("negative", "positive");
        validation.record("positive", "negative");
        validation.record("positive", "positive");
        let test = ConfusionMatrix::new(labels);

        let diagnosis = Diagnosis::from_confusion_matrices(&validation, &test);
        assert_eq!(diagnosis.bias, 2);
        assert_eq!(diagnosis.variance, 0);
        assert_eq!(diagnosis.fit, Fit::Underfit);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Diagnosis::from_counts(50, 0).to_string(),
            "Bias Level: Medium (Value: 50)\nVariance Level: Low (Value: 0)\nModel Fit: Underfit"
        );
    }
}

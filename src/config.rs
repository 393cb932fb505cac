//! Run configuration.
//!
//! Every field has a default, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "data_path": "reviews.csv", "svm": { "penalty": "l1", "c": 0.5 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dataset::split::DEFAULT_SHUFFLE_SEED;
use crate::error::{Result, SentimentError};
use crate::ml::svm::SvmConfig;

/// Default dataset location.
pub const DEFAULT_DATA_PATH: &str = "IMDBDataset.csv";

/// Default seed of the three-way and class-balanced splits.
pub const DEFAULT_SPLIT_SEED: u64 = 123457890;

/// Parameters of an experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// CSV file with `review` and `sentiment` columns.
    pub data_path: PathBuf,
    /// Seed of the dataset split.
    pub split_seed: u64,
    /// Seed of the balanced split's final test shuffle.
    pub shuffle_seed: u64,
    /// Also normalize the label column.
    pub normalize_labels: bool,
    /// Classifier settings.
    pub svm: SvmConfig,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            split_seed: DEFAULT_SPLIT_SEED,
            shuffle_seed: DEFAULT_SHUFFLE_SEED,
            normalize_labels: false,
            svm: SvmConfig::default(),
        }
    }
}

impl SentimentConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: SentimentConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(SentimentError::config("data_path must not be empty"));
        }
        self.svm.validate()
    }
}

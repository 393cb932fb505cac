//! Text classifier trait definition.

use crate::error::Result;

/// A fitted model that assigns a label to each input text.
pub trait TextClassifier: Send + Sync {
    /// Predict one label per text, in input order.
    fn predict(&self, texts: &[String]) -> Result<Vec<String>>;

    /// Labels this classifier can emit, in sorted order.
    fn classes(&self) -> &[String];

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

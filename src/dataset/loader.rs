//! CSV dataset loader.
//!
//! Expected layout: a header row containing at least a `review` column
//! (free text) and a `sentiment` column (label). Other columns are ignored.
//!
//! ```text
//! review,sentiment
//! "One of the best films I have seen.<br /><br />A must watch",positive
//! "Dull, slow and far too long",negative
//! ```

use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::dataset::{Dataset, ReviewRecord};
use crate::error::{Result, SentimentError};

/// Name of the free-text column.
pub const REVIEW_COLUMN: &str = "review";

/// Name of the label column.
pub const SENTIMENT_COLUMN: &str = "sentiment";

/// Load a review dataset from a CSV file.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    info!("Loading dataset from {}", path.display());

    let file = std::fs::File::open(path)?;
    let dataset = load_csv_from_reader(file)?;

    info!("Loaded {} reviews", dataset.len());
    Ok(dataset)
}

/// Load a review dataset from any CSV source.
pub fn load_csv_from_reader<R: Read>(source: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();

    let review_idx = column_index(&headers, REVIEW_COLUMN)?;
    let sentiment_idx = column_index(&headers, SENTIMENT_COLUMN)?;
    debug!("CSV columns: {:?}", headers.iter().collect::<Vec<_>>());

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let text = record.get(review_idx).ok_or_else(|| {
            SentimentError::dataset(format!("CSV row {row_no}: missing '{REVIEW_COLUMN}' value"))
        })?;
        let label = record.get(sentiment_idx).ok_or_else(|| {
            SentimentError::dataset(format!(
                "CSV row {row_no}: missing '{SENTIMENT_COLUMN}' value"
            ))
        })?;

        records.push(ReviewRecord::new(text, label));
    }

    Ok(Dataset::new(records))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| SentimentError::dataset(format!("CSV missing '{name}' column")))
}

//! Fixture loading for the product catalog.
//!
//! Records are loaded once at startup and handed to the aggregators by reference.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::ProductRecord;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed product fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of product records.
pub fn parse_records(json: &str) -> Result<Vec<ProductRecord>, FixtureError> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;
    tracing::debug!(count = records.len(), "parsed product fixture");
    Ok(records)
}

/// Read and parse a fixture file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ProductRecord>, FixtureError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&json)?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded product fixture");
    Ok(records)
}

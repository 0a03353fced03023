//! JSON record loading.
//!
//! Reads the four record collections from a data directory. Each file holds
//! a single JSON array.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::config::ReportgenConfig;
use crate::store::RecordStore;

/// Load one record collection from a JSON file.
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.is_file() {
        anyhow::bail!("data file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read data file: {}", path.display()))?;

    let records: Vec<T> = parse_collection(&content, path)?;
    tracing::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a JSON array of records (useful for testing).
pub fn parse_collection<T: DeserializeOwned>(content: &str, source_path: &Path) -> Result<Vec<T>> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))
}

/// Load all four collections named by `config` into a [`RecordStore`].
pub fn load_store(config: &ReportgenConfig) -> Result<RecordStore> {
    let students = load_collection(&config.students_path())?;
    let assessments = load_collection(&config.assessments_path())?;
    let questions = load_collection(&config.questions_path())?;
    let response_sets = load_collection(&config.responses_path())?;

    Ok(RecordStore::new(
        students,
        assessments,
        questions,
        response_sets,
    ))
}

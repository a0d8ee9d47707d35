//! Record Import
//!
//! Loads company records from files for seeding the registry and for the
//! offline `summarize` command:
//! - CSV with a header row (column mapping detected from header names)
//! - JSON array of company objects

mod csv_import;

pub use csv_import::{CsvImportResult, CsvImporter};

use std::path::Path;

use crate::company::NewCompany;

/// Errors that can occur while importing records
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),
}

/// Read a JSON array of companies
pub fn load_json(path: &Path) -> Result<Vec<NewCompany>, ImportError> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

/// Parse a JSON array of companies
pub fn parse_json(content: &str) -> Result<Vec<NewCompany>, ImportError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a `.csv` or `.json` file, dispatching on the extension.
///
/// CSV rows that fail to parse are logged and skipped.
pub fn load_file(path: &Path) -> Result<Vec<NewCompany>, ImportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => {
            let result = CsvImporter::new().import_file(path)?;
            if result.rows_failed > 0 {
                tracing::warn!(
                    path = %path.display(),
                    failed = result.rows_failed,
                    "Skipped invalid CSV rows"
                );
                for error in &result.errors {
                    tracing::debug!("{}", error);
                }
            }
            Ok(result.companies)
        }
        "json" => load_json(path),
        other => Err(ImportError::UnsupportedFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            other.to_string()
        })),
    }
}

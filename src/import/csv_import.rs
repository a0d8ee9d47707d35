//! CSV Import
//!
//! Company rows from CSV exports. Columns are matched by header name, so
//! column order and extra columns do not matter.
//!
//! Trimming applies to the header row, the name and the optional contact
//! columns. Industry and status values are kept exactly as written, so
//! `" Tech"` and `"Tech"` stay separate keys, as they would over JSON.

use std::io::Read;
use std::path::Path;

use super::ImportError;
use crate::company::NewCompany;

/// Column positions detected from the header row
#[derive(Debug, Clone, Default)]
struct ColumnMap {
    name: Option<usize>,
    industry: Option<usize>,
    status: Option<usize>,
    email: Option<usize>,
    website: Option<usize>,
}

/// CSV importer for company records
pub struct CsvImporter {
    delimiter: u8,
    trim: bool,
}

/// Result of a CSV import operation
#[derive(Debug, Default)]
pub struct CsvImportResult {
    pub companies: Vec<NewCompany>,
    pub rows_processed: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvImporter {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }

    /// Set the field delimiter (e.g. `b';'`)
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Whether to trim whitespace around headers, names and contact fields.
    /// Industry and status are never trimmed.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Import from a file path
    pub fn import_file(&self, path: &Path) -> Result<CsvImportResult, ImportError> {
        let file = std::fs::File::open(path)?;
        self.import_reader(file)
    }

    /// Import from CSV text
    pub fn import_str(&self, content: &str) -> Result<CsvImportResult, ImportError> {
        self.import_reader(content.as_bytes())
    }

    /// Import from any reader
    pub fn import_reader<R: Read>(&self, reader: R) -> Result<CsvImportResult, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(if self.trim {
                csv::Trim::Headers
            } else {
                csv::Trim::None
            })
            .flexible(true)
            .from_reader(reader);

        let columns = detect_columns(csv_reader.headers()?);
        let name_col = columns
            .name
            .ok_or_else(|| ImportError::MissingColumn("name".to_string()))?;

        let mut result = CsvImportResult::default();

        for (row_idx, record) in csv_reader.records().enumerate() {
            // Header is line 1
            let line = row_idx + 2;
            result.rows_processed += 1;

            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    result.rows_failed += 1;
                    result.errors.push(format!("Line {}: {}", line, e));
                    continue;
                }
            };

            let field = |col: Option<usize>| -> String {
                col.and_then(|c| record.get(c)).unwrap_or("").to_string()
            };
            let trimmed = |col: Option<usize>| -> Option<String> {
                col.and_then(|c| record.get(c))
                    .map(|v| if self.trim { v.trim() } else { v })
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };

            let Some(name) = trimmed(Some(name_col)).filter(|n| !n.trim().is_empty()) else {
                result.rows_failed += 1;
                result.errors.push(format!("Line {}: missing company name", line));
                continue;
            };

            let company = NewCompany {
                name,
                industry: field(columns.industry),
                status: field(columns.status),
                contact_email: trimmed(columns.email),
                website: trimmed(columns.website),
            };

            if let Err(e) = company.validate() {
                result.rows_failed += 1;
                result.errors.push(format!("Line {}: {}", line, e));
                continue;
            }

            result.companies.push(company);
        }

        tracing::debug!(
            processed = result.rows_processed,
            failed = result.rows_failed,
            "CSV import finished"
        );

        Ok(result)
    }
}

/// Map header names to the fields we know
fn detect_columns(headers: &csv::StringRecord) -> ColumnMap {
    let mut columns = ColumnMap::default();

    for (idx, header) in headers.iter().enumerate() {
        let header = header.trim().to_lowercase().replace(|c: char| c == ' ' || c == '-', "_");
        let slot = match header.as_str() {
            "name" | "company" | "company_name" => &mut columns.name,
            "industry" | "sector" => &mut columns.industry,
            "status" | "stage" => &mut columns.status,
            "email" | "contact" | "contact_email" => &mut columns.email,
            "website" | "url" | "domain" => &mut columns.website,
            _ => continue,
        };
        // First matching column wins
        if slot.is_none() {
            *slot = Some(idx);
        }
    }

    columns
}

//! Registry error types

use thiserror::Error;

use super::types::CompanyId;

/// Errors that can occur when mutating the company registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Requested company does not exist
    #[error("Company not found: {0}")]
    NotFound(CompanyId),

    /// Creation input failed validation
    #[error("Invalid company: {0}")]
    Validation(String),
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

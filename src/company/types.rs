//! Core data types for company records
//!
//! - `CompanyId`: Opaque record identity
//! - `Company`: A client company as shown on the dashboard
//! - `NewCompany`: Creation input accepted by the registry and importers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::{RegistryError, RegistryResult};

/// Maximum length of a company name
pub const MAX_NAME_LEN: usize = 200;

/// Opaque identity of a company record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(Uuid);

impl CompanyId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for CompanyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A client company
///
/// `industry` and `status` are the classification attributes the
/// aggregator groups by. Their values are free-form and used verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub industry: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Create a company with a fresh id and the current timestamp
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        NewCompany::new(name, industry, status).into_company()
    }
}

/// Input for creating a company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCompany {
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl NewCompany {
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            industry: industry.into(),
            status: status.into(),
            contact_email: None,
            website: None,
        }
    }

    /// Builder method: set the contact email
    pub fn contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    /// Builder method: set the website
    pub fn website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }

    /// Check the input before it enters the registry.
    ///
    /// Only the name is constrained. Classification values are kept as given,
    /// an empty industry is simply its own group.
    pub fn validate(&self) -> RegistryResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RegistryError::Validation(
                "Company name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(RegistryError::Validation(format!(
                "Company name exceeds maximum length of {} characters",
                MAX_NAME_LEN
            )));
        }
        Ok(())
    }

    /// Assign identity and creation time
    pub fn into_company(self) -> Company {
        Company {
            id: CompanyId::new(),
            name: self.name.trim().to_string(),
            industry: self.industry,
            status: self.status,
            contact_email: self.contact_email.filter(|s| !s.is_empty()),
            website: self.website.filter(|s| !s.is_empty()),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(NewCompany::new("Acme", "Tech", "Active").validate().is_ok());
        assert!(NewCompany::new("   ", "Tech", "Active").validate().is_err());
        assert!(NewCompany::new("x".repeat(MAX_NAME_LEN + 1), "Tech", "Active")
            .validate()
            .is_err());
    }

    #[test]
    fn test_empty_classification_is_allowed() {
        let input = NewCompany::new("Acme", "", "");
        assert!(input.validate().is_ok());

        let company = input.into_company();
        assert_eq!(company.industry, "");
        assert_eq!(company.status, "");
    }

    #[test]
    fn test_into_company_trims_name_and_drops_empty_fields() {
        let company = NewCompany::new("  Acme  ", "Tech", "Lead")
            .contact_email("")
            .website("https://acme.test")
            .into_company();

        assert_eq!(company.name, "Acme");
        assert_eq!(company.contact_email, None);
        assert_eq!(company.website.as_deref(), Some("https://acme.test"));
    }

    #[test]
    fn test_company_id_parse() {
        let id = CompanyId::new();
        let parsed: CompanyId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<CompanyId>().is_err());
    }
}

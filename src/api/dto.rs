//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::aggregate::{CacheStats, ChartPoint};
use crate::company::{Company, NewCompany};
use crate::theme::Theme;

// ============================================
// COMPANY DTOs
// ============================================

/// List companies response
#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
    pub total: usize,
}

/// Batch create request
#[derive(Debug, Deserialize)]
pub struct BatchCreateRequest {
    pub companies: Vec<NewCompany>,
}

/// Batch create response
#[derive(Debug, Serialize)]
pub struct BatchCreateResponse {
    /// Number of companies created
    pub created: usize,
    pub companies: Vec<Company>,
}

/// CSV import response
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    /// Number of companies added
    pub imported: usize,
    pub rows_processed: usize,
    pub rows_failed: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

// ============================================
// DISTRIBUTION DTOs
// ============================================

/// Distribution query parameters
#[derive(Debug, Default, Deserialize)]
pub struct DistributionParams {
    /// `industry` or `status`; both when omitted
    #[serde(default)]
    pub by: Option<String>,
}

/// Distribution response, `{label, value}` entries per dimension
#[derive(Debug, Serialize, Deserialize)]
pub struct DistributionResponse {
    /// Number of companies aggregated
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Vec<ChartPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<ChartPoint>>,
}

/// Chart query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ChartsParams {
    /// `light` or `dark`; the shell theme when omitted
    #[serde(default)]
    pub theme: Option<String>,
}

// ============================================
// SHELL DTOs
// ============================================

/// Sidebar query parameters
#[derive(Debug, Default, Deserialize)]
pub struct SidebarParams {
    /// Current route, defaults to `/`
    #[serde(default)]
    pub path: Option<String>,
}

/// Theme state response
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub dark_mode: bool,
    pub label: String,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            dark_mode: theme.is_dark(),
            label: theme.label().to_string(),
        }
    }
}

/// Set theme request
#[derive(Debug, Deserialize)]
pub struct SetThemeRequest {
    pub theme: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of companies in the registry
    pub companies: usize,
    /// Distribution memo counters
    pub cache: CacheStats,
    /// Active session provider
    pub session_provider: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

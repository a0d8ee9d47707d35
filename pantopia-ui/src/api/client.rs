//! HTTP API Client
//!
//! Functions for communicating with the Pantopia REST API.

use gloo_net::http::Request;

use crate::state::theme::Theme;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

/// Redirect used when the API itself cannot be reached during sign out
pub const DEFAULT_FALLBACK_REDIRECT: &str = "http://localhost:8080/login";

const API_URL_KEY: &str = "pantopia_api_url";
const FALLBACK_URL_KEY: &str = "pantopia_fallback_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = stored(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    store(API_URL_KEY, url);
}

/// Full-page redirect target when logout cannot even reach the API
pub fn fallback_redirect() -> String {
    stored(FALLBACK_URL_KEY).unwrap_or_else(|| DEFAULT_FALLBACK_REDIRECT.to_string())
}

/// Read a non-empty value from local storage
pub fn stored(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}

/// Write a value to local storage, ignoring failures
pub fn store(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
    pub total: usize,
}

/// One `{label, value}` pair, as fed to the chart widgets
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct BarChart {
    pub title: String,
    pub subtitle: String,
    pub total: usize,
    pub points: Vec<ChartPoint>,
    pub bar_color: String,
    pub no_data: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub percent: u32,
    pub label_text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct PieChart {
    pub title: String,
    pub subtitle: String,
    pub total: usize,
    pub slices: Vec<PieSlice>,
    pub label_color: String,
    pub no_data: bool,
}

/// Colors the server picked for the active theme
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Palette {
    pub chart_background: String,
    pub text: String,
    pub secondary_text: String,
    pub axis: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ChartsView {
    pub theme: Theme,
    pub total: usize,
    pub no_data: bool,
    pub industry: BarChart,
    pub status: PieChart,
    pub palette: Palette,
}

/// Server answer to a sign-out request
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LogoutOutcome {
    SignedOut { redirect: String },
    Fallback { redirect: String, reason: String },
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

async fn error_message(response: gloo_net::http::Response) -> String {
    response
        .json::<ApiErrorBody>()
        .await
        .map(|body| body.error.message)
        .unwrap_or_else(|_| format!("Request failed ({})", response.status()))
}

// ============ API Functions ============

/// Fetch chart models for the given theme
pub async fn fetch_charts(theme: Theme) -> Result<ChartsView, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/charts?theme={}", api_base, theme.as_str()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all companies
pub async fn fetch_companies() -> Result<Vec<Company>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/companies", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: CompanyListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.companies)
}

/// Create a company
pub async fn create_company(name: &str, industry: &str, status: &str) -> Result<Company, String> {
    #[derive(serde::Serialize)]
    struct CreateCompanyRequest<'a> {
        name: &'a str,
        industry: &'a str,
        status: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/companies", api_base))
        .json(&CreateCompanyRequest { name, industry, status })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Store the theme on the server so other clients pick it up
pub async fn set_theme(theme: Theme) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct SetThemeRequest {
        theme: &'static str,
    }

    let api_base = get_api_base();

    let response = Request::put(&format!("{}/shell/theme", api_base))
        .json(&SetThemeRequest { theme: theme.as_str() })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// End the session
pub async fn logout() -> Result<LogoutOutcome, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/shell/logout", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

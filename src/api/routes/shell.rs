//! Shell Routes
//!
//! Navigation and session endpoints backing the sidebar.
//!
//! - GET /api/v1/shell/sidebar - Sidebar view for a route
//! - GET /api/v1/shell/theme - Current theme
//! - PUT /api/v1/shell/theme - Set the theme
//! - POST /api/v1/shell/theme/toggle - Flip the theme
//! - POST /api/v1/shell/logout - End the session

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{SetThemeRequest, SidebarParams, ThemeResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::session::LogoutOutcome;
use crate::shell::SidebarView;
use crate::theme::Theme;

/// GET /api/v1/shell/sidebar?path=/clients
pub async fn get_sidebar(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SidebarParams>,
) -> Json<SidebarView> {
    let path = params.path.as_deref().unwrap_or("/");
    Json(state.shell.sidebar(path).await)
}

/// GET /api/v1/shell/theme
pub async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemeResponse> {
    Json(state.shell.theme().await.into())
}

/// PUT /api/v1/shell/theme
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetThemeRequest>,
) -> ApiResult<Json<ThemeResponse>> {
    let theme: Theme = req.theme.parse().map_err(ApiError::Validation)?;
    state.shell.set_theme(theme).await;
    Ok(Json(theme.into()))
}

/// POST /api/v1/shell/theme/toggle
pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> Json<ThemeResponse> {
    Json(state.shell.toggle_theme().await.into())
}

/// POST /api/v1/shell/logout
///
/// Always 200: a failed logout is answered with the fallback redirect.
pub async fn logout(State(state): State<Arc<AppState>>) -> Json<LogoutOutcome> {
    Json(state.shell.sign_out().await)
}

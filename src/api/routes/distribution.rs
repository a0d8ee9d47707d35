//! Distribution Routes
//!
//! Aggregated views of the company list.
//!
//! - GET /api/v1/distribution - Count series by industry and/or status
//! - GET /api/v1/charts - Chart-ready bar and pie models

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::aggregate::{ChartsView, GroupBy};
use crate::api::dto::{ChartsParams, DistributionParams, DistributionResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::theme::Theme;

/// GET /api/v1/distribution?by=industry|status
pub async fn get_distribution(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DistributionParams>,
) -> ApiResult<Json<DistributionResponse>> {
    let group_by = params
        .by
        .as_deref()
        .map(str::parse::<GroupBy>)
        .transpose()
        .map_err(ApiError::Validation)?;

    let distribution = state.distribution().await;

    let wants = |dimension: GroupBy| group_by.map_or(true, |g| g == dimension);

    Ok(Json(DistributionResponse {
        total: distribution.total,
        industry: wants(GroupBy::Industry).then(|| distribution.industry.chart_points()),
        status: wants(GroupBy::Status).then(|| distribution.status.chart_points()),
    }))
}

/// GET /api/v1/charts?theme=light|dark
pub async fn get_charts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartsParams>,
) -> ApiResult<Json<ChartsView>> {
    let theme = match params.theme.as_deref() {
        Some(raw) => raw.parse::<Theme>().map_err(ApiError::Validation)?,
        None => state.shell.theme().await,
    };

    let distribution = state.distribution().await;

    Ok(Json(ChartsView::build(&distribution, theme)))
}

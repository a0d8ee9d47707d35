//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Ready once the registry answers and a distribution can be produced.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if check_aggregation(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let aggregation_ok = check_aggregation(&state).await;

    Json(HealthResponse {
        status: if aggregation_ok { "healthy" } else { "degraded" }.to_string(),
        companies: state.registry.len().await,
        cache: state.cache.stats(),
        session_provider: state.shell.session_provider().to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The aggregate of the current snapshot must account for every record
async fn check_aggregation(state: &AppState) -> bool {
    let snapshot = state.registry.snapshot().await;
    let distribution = state.cache.get_or_compute(&snapshot);
    distribution.total == snapshot.len() && distribution.industry.total() == snapshot.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}

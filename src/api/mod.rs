//! Pantopia REST API
//!
//! HTTP API layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Companies
//! - `GET /api/v1/companies` - List all companies
//! - `POST /api/v1/companies` - Create a company
//! - `POST /api/v1/companies/batch` - Create several companies
//! - `POST /api/v1/companies/import` - Import a CSV body
//! - `GET /api/v1/companies/:id` - Get a company
//! - `DELETE /api/v1/companies/:id` - Delete a company
//!
//! ## Distribution
//! - `GET /api/v1/distribution` - Count series by industry / status
//! - `GET /api/v1/charts` - Chart-ready bar and pie models
//!
//! ## Shell
//! - `GET /api/v1/shell/sidebar` - Sidebar view for a route
//! - `GET /api/v1/shell/theme` - Current theme
//! - `PUT /api/v1/shell/theme` - Set the theme
//! - `POST /api/v1/shell/theme/toggle` - Flip the theme
//! - `POST /api/v1/shell/logout` - End the session (fallback redirect on failure)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use pantopia::api::{serve, AppState};
//! use pantopia::company::CompanyRegistry;
//! use pantopia::config::Config;
//! use pantopia::shell::Shell;
//! use pantopia::theme::ThemeState;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let theme = ThemeState::new(config.dashboard.default_theme);
//!     let shell = Arc::new(Shell::from_config(theme, config.session.clone())?);
//!     let registry = Arc::new(CompanyRegistry::new());
//!
//!     let state = AppState::new(registry, shell, config.api.clone());
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Company routes
        .route(
            "/companies",
            get(routes::companies::list_companies).post(routes::companies::create_company),
        )
        .route("/companies/batch", post(routes::companies::create_batch))
        .route("/companies/import", post(routes::companies::import_csv))
        .route(
            "/companies/:id",
            get(routes::companies::get_company).delete(routes::companies::delete_company),
        )
        // Distribution routes
        .route("/distribution", get(routes::distribution::get_distribution))
        .route("/charts", get(routes::distribution::get_charts))
        // Shell routes
        .route("/shell/sidebar", get(routes::shell::get_sidebar))
        .route(
            "/shell/theme",
            get(routes::shell::get_theme).put(routes::shell::set_theme),
        )
        .route("/shell/theme/toggle", post(routes::shell::toggle_theme))
        .route("/shell/logout", post(routes::shell::logout))
        .layer(DefaultBodyLimit::max(state.config.max_body_size));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured UI origins; any origin when none are listed
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Pantopia API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Pantopia API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::{CompanyRegistry, NewCompany};
    use crate::config::SessionConfig;
    use crate::shell::Shell;
    use crate::theme::{Theme, ThemeState};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    const FALLBACK: &str = "https://crm.example.com/login";

    async fn create_test_app(seed: Vec<NewCompany>) -> (Router, Arc<CompanyRegistry>) {
        let registry = Arc::new(CompanyRegistry::new());
        if !seed.is_empty() {
            registry.insert_batch(seed).await.unwrap();
        }

        let session = SessionConfig {
            fallback_redirect_url: FALLBACK.to_string(),
            ..Default::default()
        };
        let shell = Arc::new(Shell::from_config(ThemeState::new(Theme::Light), session).unwrap());

        let state = AppState::new(Arc::clone(&registry), shell, ApiConfig::default());
        (build_router(state), registry)
    }

    fn sample() -> Vec<NewCompany> {
        vec![
            NewCompany::new("Acme", "Tech", "Active"),
            NewCompany::new("Initech", "Tech", "Lead"),
            NewCompany::new("Globex", "Finance", "Active"),
        ]
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    async fn send_json(
        app: Router,
        method: &str,
        uri: &str,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }

    async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _) = create_test_app(Vec::new()).await;
        let (status, _) = get_json(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _) = create_test_app(sample()).await;
        let (status, _) = get_json(app, "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _) = create_test_app(sample()).await;
        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["companies"], 3);
        assert_eq!(body["session_provider"], "unconfigured");
    }

    #[tokio::test]
    async fn test_list_companies_empty() {
        let (app, _) = create_test_app(Vec::new()).await;
        let (status, body) = get_json(app, "/api/v1/companies").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_create_company() {
        let (app, registry) = create_test_app(Vec::new()).await;
        let (status, body) = send_json(
            app,
            "POST",
            "/api/v1/companies",
            r#"{"name": "Acme", "industry": "Tech", "status": "Active"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["industry"], "Tech");
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_company_invalid_json() {
        let (app, _) = create_test_app(Vec::new()).await;
        let (status, _) = send_json(app, "POST", "/api/v1/companies", "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_company_empty_name() {
        let (app, _) = create_test_app(Vec::new()).await;
        let (status, body) = send_json(
            app,
            "POST",
            "/api/v1/companies",
            r#"{"name": "", "industry": "Tech", "status": "Active"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_get_and_delete_company() {
        let (app, registry) = create_test_app(sample()).await;
        let id = registry.list().await[0].id;

        let (status, body) = get_json(app.clone(), &format!("/api/v1/companies/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Acme");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/companies/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let (status, _) = get_json(app, &format!("/api/v1/companies/{}", id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_import_csv() {
        let (app, registry) = create_test_app(Vec::new()).await;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/companies/import")
                    .header("Content-Type", "text/csv")
                    .body(Body::from(
                        "name,industry,status\nAcme,Tech,Active\n,Tech,Lead\nGlobex,Finance,Lead\n",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        let (status, body) = read_json(response).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["imported"], 2);
        assert_eq!(body["rows_failed"], 1);
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn test_import_csv_keeps_valid_rows_next_to_invalid_ones() {
        let (app, registry) = create_test_app(Vec::new()).await;
        let body = format!(
            "name,industry,status\nAcme,Tech,Active\n{},Tech,Lead\n,Tech,Lead\n",
            "x".repeat(201)
        );
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/companies/import")
                    .header("Content-Type", "text/csv")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let (status, body) = read_json(response).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["imported"], 1);
        assert_eq!(body["rows_processed"], 3);
        assert_eq!(body["rows_failed"], 2);
        assert!(body["errors"][0].as_str().unwrap().starts_with("Line 3"));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_distribution_scenario() {
        let (app, _) = create_test_app(sample()).await;
        let (status, body) = get_json(app, "/api/v1/distribution").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(
            body["industry"],
            serde_json::json!([{"label": "Tech", "value": 2}, {"label": "Finance", "value": 1}])
        );
        assert_eq!(
            body["status"],
            serde_json::json!([{"label": "Active", "value": 2}, {"label": "Lead", "value": 1}])
        );
    }

    #[tokio::test]
    async fn test_distribution_single_dimension() {
        let (app, _) = create_test_app(sample()).await;
        let (status, body) = get_json(app.clone(), "/api/v1/distribution?by=status").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("industry").is_none());
        assert_eq!(body["status"][0]["label"], "Active");

        let (status, _) = get_json(app, "/api/v1/distribution?by=region").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_distribution_reflects_new_records() {
        let (app, _) = create_test_app(sample()).await;
        let (_, before) = get_json(app.clone(), "/api/v1/distribution?by=industry").await;
        assert_eq!(before["industry"][1]["value"], 1);

        send_json(
            app.clone(),
            "POST",
            "/api/v1/companies/batch",
            r#"{"companies": [
                {"name": "Hooli", "industry": "Finance", "status": "Lead"},
                {"name": "Vandelay", "industry": "Finance", "status": "Lead"}
            ]}"#,
        )
        .await;

        let (_, after) = get_json(app, "/api/v1/distribution?by=industry").await;
        assert_eq!(after["total"], 5);
        assert_eq!(after["industry"][0]["label"], "Finance");
        assert_eq!(after["industry"][0]["value"], 3);
    }

    #[tokio::test]
    async fn test_charts_empty_is_no_data() {
        let (app, _) = create_test_app(Vec::new()).await;
        let (status, body) = get_json(app, "/api/v1/charts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["no_data"], true);
        assert_eq!(body["theme"], "light");
        assert_eq!(body["industry"]["points"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_charts_dark_theme() {
        let (app, _) = create_test_app(sample()).await;
        let (status, body) = get_json(app, "/api/v1/charts?theme=dark").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme"], "dark");
        assert_eq!(body["industry"]["bar_color"], "#1a91ff");
        assert_eq!(body["status"]["slices"][0]["label_text"], "Active: 67%");
    }

    #[tokio::test]
    async fn test_sidebar_and_theme_toggle() {
        let (app, _) = create_test_app(Vec::new()).await;

        let (status, body) = get_json(app.clone(), "/api/v1/shell/sidebar?path=/clients").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["brand"], "PANTOPIA");
        assert_eq!(body["main_menu"][1]["active"], true);
        assert_eq!(body["main_menu"][0]["active"], false);

        let (status, body) = send_json(app.clone(), "POST", "/api/v1/shell/theme/toggle", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme"], "dark");

        let (_, body) = get_json(app, "/api/v1/shell/sidebar").await;
        assert_eq!(body["dark_mode"], true);
        assert_eq!(body["theme_label"], "Dark mode");
    }

    #[tokio::test]
    async fn test_set_theme() {
        let (app, _) = create_test_app(Vec::new()).await;

        let (status, body) =
            send_json(app.clone(), "PUT", "/api/v1/shell/theme", r#"{"theme": "dark"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dark_mode"], true);

        let (status, _) =
            send_json(app, "PUT", "/api/v1/shell/theme", r#"{"theme": "sepia"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_logout_falls_back_without_auth_service() {
        let (app, _) = create_test_app(Vec::new()).await;
        let (status, body) = send_json(app, "POST", "/api/v1/shell/logout", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "fallback");
        assert_eq!(body["redirect"], FALLBACK);
    }
}

//! Pantopia API Server
//!
//! Run with: cargo run --bin pantopia-api
//!
//! # Configuration
//!
//! Read from the first config file found (`~/.config/pantopia/config.toml`,
//! `/etc/pantopia/config.toml`, `./config.toml`), then environment variables:
//! - `PANTOPIA_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PANTOPIA_API_PORT`: Port to listen on (default: 8082)
//! - `PANTOPIA_AUTH_LOGOUT_URL`: Auth service logout endpoint (optional)
//! - `PANTOPIA_FALLBACK_REDIRECT_URL`: Redirect used when logout fails
//! - `PANTOPIA_THEME`: Initial theme, light or dark (default: light)
//! - `PANTOPIA_SEED_FILE`: CSV/JSON file loaded into the registry at startup
//! - `PANTOPIA_LOG_LEVEL`: Log level (default: info)
//! - `PANTOPIA_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directive, takes precedence over the log level

use pantopia::api::{serve, AppState};
use pantopia::company::CompanyRegistry;
use pantopia::config::{Config, LoggingConfig};
use pantopia::import;
use pantopia::shell::Shell;
use pantopia::theme::ThemeState;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();

    init_tracing(&config.logging);

    tracing::info!("Starting Pantopia API server v{}", env!("CARGO_PKG_VERSION"));

    // Company registry, optionally seeded from a file
    let registry = Arc::new(CompanyRegistry::new());
    if let Some(seed_file) = &config.dashboard.seed_file {
        let records = import::load_file(Path::new(seed_file))?;
        let created = registry.insert_batch(records).await?;
        tracing::info!("Seeded {} companies from {}", created.len(), seed_file);
    }

    // Navigation shell with the configured session provider
    let theme = ThemeState::new(config.dashboard.default_theme);
    let shell = Arc::new(Shell::from_config(theme, config.session.clone())?);
    tracing::info!(
        provider = shell.session_provider(),
        theme = %config.dashboard.default_theme,
        "Shell initialized"
    );

    let state = AppState::new(registry, shell, config.api.clone());

    // Run server
    serve(state, &config.api).await?;

    tracing::info!("Pantopia API server stopped");

    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("pantopia={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

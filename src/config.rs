//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10 MB
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8084".to_string(),
                "http://127.0.0.1:8084".to_string(),
            ],
            request_timeout_secs: default_request_timeout(),
            max_body_size: default_max_body_size(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Session / auth service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Auth service logout endpoint. Without it every sign-out falls back.
    #[serde(default)]
    pub auth_logout_url: Option<String>,

    /// Where to send the browser when logout fails
    #[serde(default = "default_fallback_redirect")]
    pub fallback_redirect_url: String,

    /// In-app route after a successful logout
    #[serde(default = "default_signed_out_path")]
    pub signed_out_path: String,

    #[serde(default = "default_session_timeout")]
    pub request_timeout_ms: u64,
}

fn default_fallback_redirect() -> String {
    "http://localhost:8080/login".to_string()
}

fn default_signed_out_path() -> String {
    "/login".to_string()
}

fn default_session_timeout() -> u64 {
    5000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auth_logout_url: None,
            fallback_redirect_url: default_fallback_redirect(),
            signed_out_path: default_signed_out_path(),
            request_timeout_ms: default_session_timeout(),
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub default_theme: Theme,

    /// CSV or JSON file loaded into the registry at startup
    #[serde(default)]
    pub seed_file: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("pantopia").join("config.toml")),
            Some(PathBuf::from("/etc/pantopia/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment in production)
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(host) = lookup("PANTOPIA_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("PANTOPIA_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid PANTOPIA_API_PORT"),
            }
        }

        // Session overrides
        if let Some(url) = lookup("PANTOPIA_AUTH_LOGOUT_URL") {
            self.session.auth_logout_url = Some(url).filter(|u| !u.is_empty());
        }
        if let Some(url) = lookup("PANTOPIA_FALLBACK_REDIRECT_URL") {
            self.session.fallback_redirect_url = url;
        }

        // Dashboard overrides
        if let Some(theme) = lookup("PANTOPIA_THEME") {
            match theme.parse() {
                Ok(t) => self.dashboard.default_theme = t,
                Err(e) => tracing::warn!("Ignoring PANTOPIA_THEME: {}", e),
            }
        }
        if let Some(seed) = lookup("PANTOPIA_SEED_FILE") {
            self.dashboard.seed_file = Some(seed).filter(|s| !s.is_empty());
        }

        // Logging overrides
        if let Some(level) = lookup("PANTOPIA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PANTOPIA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Pantopia Configuration
#
# Environment variables override these settings:
# - PANTOPIA_API_HOST
# - PANTOPIA_API_PORT
# - PANTOPIA_AUTH_LOGOUT_URL
# - PANTOPIA_FALLBACK_REDIRECT_URL
# - PANTOPIA_THEME
# - PANTOPIA_SEED_FILE
# - PANTOPIA_LOG_LEVEL
# - PANTOPIA_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins (empty = allow any)
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

# Request timeout in seconds
request_timeout_secs = 30

# Maximum request body size in bytes
max_body_size = 10485760

[session]
# Auth service logout endpoint (optional)
# auth_logout_url = "http://localhost:8080/api/auth/logout"

# Full-page redirect used when logout fails
fallback_redirect_url = "http://localhost:8080/login"

# In-app route after a successful logout
signed_out_path = "/login"

# Auth service request timeout (ms)
request_timeout_ms = 5000

[dashboard]
# Initial theme: light or dark
default_theme = "light"

# Company records loaded at startup (.csv or .json)
# seed_file = "./companies.csv"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

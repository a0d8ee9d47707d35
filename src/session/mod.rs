//! Session Termination
//!
//! Logout is owned by an external auth service. This module only defines
//! the capability the shell calls and the providers that implement it:
//!
//! - `HttpSessionProvider`: POSTs to the auth service's logout endpoint
//! - `UnconfiguredSession`: used when no endpoint is configured, always fails
//!
//! Failures are not surfaced to the user as errors. The shell turns them
//! into a forced redirect to the configured fallback URL.

mod http;

pub use http::HttpSessionProvider;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Capability to end the current user session
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// End the session
    async fn logout(&self) -> Result<(), SessionError>;
}

/// Errors raised by session providers
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No auth service configured")]
    NotConfigured,

    #[error("Auth service timed out")]
    Timeout,

    #[error("Auth service unavailable")]
    Unavailable,

    #[error("Auth service rejected logout ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Request failed: {0}")]
    Request(String),
}

/// Result of a sign-out attempt, as handed to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LogoutOutcome {
    /// Session ended; navigate within the app
    SignedOut { redirect: String },
    /// Session termination failed; force a full-page navigation
    Fallback { redirect: String, reason: String },
}

impl LogoutOutcome {
    pub fn redirect(&self) -> &str {
        match self {
            LogoutOutcome::SignedOut { redirect } | LogoutOutcome::Fallback { redirect, .. } => {
                redirect
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LogoutOutcome::Fallback { .. })
    }
}

/// Provider used when no auth service is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredSession;

#[async_trait]
impl SessionProvider for UnconfiguredSession {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn logout(&self) -> Result<(), SessionError> {
        Err(SessionError::NotConfigured)
    }
}

//! Presentation Shell
//!
//! Navigation and session affordances wrapped around the dashboard:
//!
//! - **nav**: Menu definitions and active-route matching
//! - `Shell`: Sidebar view model, theme toggle and sign-out
//!
//! The shell owns no business state. The theme flag and the session
//! capability are handed in at construction, never looked up globally.

pub mod nav;

pub use nav::{is_active, menu_entries, normalize_path, NavEntry, NavItem, BOTTOM_MENU, MAIN_MENU};

use serde::Serialize;
use std::sync::Arc;

use crate::config::SessionConfig;
use crate::session::{
    HttpSessionProvider, LogoutOutcome, SessionError, SessionProvider, UnconfiguredSession,
};
use crate::theme::{Palette, Theme, ThemeState};

/// Brand shown in the sidebar header
pub const BRAND: &str = "PANTOPIA";

/// Sidebar as rendered for one route and theme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarView {
    pub brand: String,
    pub current_path: String,
    pub theme: Theme,
    pub dark_mode: bool,
    pub theme_label: String,
    pub theme_icon: String,
    pub main_menu: Vec<NavEntry>,
    pub bottom_menu: Vec<NavEntry>,
    pub sign_out_label: String,
    pub palette: Palette,
}

/// Navigation/session shell with injected theme and session capabilities
pub struct Shell {
    theme: ThemeState,
    session: Arc<dyn SessionProvider>,
    config: SessionConfig,
}

impl Shell {
    pub fn new(theme: ThemeState, session: Arc<dyn SessionProvider>, config: SessionConfig) -> Self {
        Self {
            theme,
            session,
            config,
        }
    }

    /// Build the shell with the session provider the configuration asks for
    pub fn from_config(theme: ThemeState, config: SessionConfig) -> Result<Self, SessionError> {
        let session: Arc<dyn SessionProvider> = match config.auth_logout_url.as_deref() {
            Some(url) => Arc::new(HttpSessionProvider::new(url, config.request_timeout_ms)?),
            None => {
                tracing::warn!(
                    fallback = %config.fallback_redirect_url,
                    "No auth logout URL configured, sign-out will always use the fallback redirect"
                );
                Arc::new(UnconfiguredSession)
            }
        };
        Ok(Self::new(theme, session, config))
    }

    pub fn session_config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn session_provider(&self) -> &str {
        self.session.name()
    }

    pub async fn theme(&self) -> Theme {
        self.theme.current().await
    }

    pub async fn set_theme(&self, theme: Theme) {
        self.theme.set(theme).await;
    }

    pub async fn toggle_theme(&self) -> Theme {
        self.theme.toggle().await
    }

    /// Sidebar view for the given route
    pub async fn sidebar(&self, current_path: &str) -> SidebarView {
        let theme = self.theme.current().await;
        let current_path = normalize_path(current_path);

        SidebarView {
            brand: BRAND.to_string(),
            current_path: current_path.to_string(),
            theme,
            dark_mode: theme.is_dark(),
            theme_label: theme.label().to_string(),
            theme_icon: theme.icon().to_string(),
            main_menu: menu_entries(MAIN_MENU, current_path),
            bottom_menu: menu_entries(BOTTOM_MENU, current_path),
            sign_out_label: "Sign out".to_string(),
            palette: theme.palette().clone(),
        }
    }

    /// End the session.
    ///
    /// A provider failure never leaves the user on an authenticated-looking
    /// page: it is logged and answered with a forced redirect to the
    /// configured fallback URL.
    pub async fn sign_out(&self) -> LogoutOutcome {
        tracing::info!(provider = self.session.name(), "Sign out requested");

        match self.session.logout().await {
            Ok(()) => LogoutOutcome::SignedOut {
                redirect: self.config.signed_out_path.clone(),
            },
            Err(e) => {
                tracing::error!(
                    provider = self.session.name(),
                    error = %e,
                    fallback = %self.config.fallback_redirect_url,
                    "Logout failed, forcing fallback redirect"
                );
                LogoutOutcome::Fallback {
                    redirect: self.config.fallback_redirect_url.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

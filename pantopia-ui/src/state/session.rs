//! Session State
//!
//! Sign-out flow for the sidebar button. The API reports whether the auth
//! service ended the session; either way the user leaves the dashboard.

use leptos::*;

use crate::api::{self, LogoutOutcome};

/// Where the browser goes after a sign-out attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignOutTarget {
    /// Client-side route change
    Route(String),
    /// Full page navigation, dropping all client state
    Page(String),
}

impl SignOutTarget {
    /// Resolve the API answer. Any failure, including not reaching the API,
    /// ends in a full page navigation.
    pub fn resolve(result: Result<LogoutOutcome, String>, fallback: &str) -> Self {
        match result {
            Ok(LogoutOutcome::SignedOut { redirect }) => {
                if redirect.starts_with('/') {
                    SignOutTarget::Route(redirect)
                } else {
                    SignOutTarget::Page(redirect)
                }
            }
            Ok(LogoutOutcome::Fallback { redirect, .. }) => SignOutTarget::Page(redirect),
            Err(_) => SignOutTarget::Page(fallback.to_string()),
        }
    }
}

/// Handle to the sign-out flow
#[derive(Clone, Copy)]
pub struct SessionController {
    pending: RwSignal<bool>,
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            pending: create_rw_signal(false),
        }
    }

    /// True while a sign-out request is in flight
    pub fn pending(&self) -> Signal<bool> {
        self.pending.into()
    }

    /// Ask the API to end the session, then leave. `navigate` handles
    /// in-app routes; everything else replaces the page.
    pub fn sign_out<F>(&self, navigate: F)
    where
        F: Fn(&str) + 'static,
    {
        if self.pending.get_untracked() {
            return;
        }
        self.pending.set(true);

        let pending = self.pending;
        spawn_local(async move {
            let result = api::logout().await;
            match &result {
                Ok(LogoutOutcome::Fallback { reason, .. }) => {
                    web_sys::console::warn_1(&format!("Sign out fell back: {}", reason).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Sign out failed: {}", e).into());
                }
                Ok(_) => {}
            }

            let target = SignOutTarget::resolve(result, &api::fallback_redirect());
            pending.set(false);

            match target {
                SignOutTarget::Route(path) => navigate(&path),
                SignOutTarget::Page(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
            }
        });
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "https://crm.test/login";

    #[test]
    fn test_signed_out_stays_in_app() {
        let target = SignOutTarget::resolve(
            Ok(LogoutOutcome::SignedOut { redirect: "/login".to_string() }),
            FALLBACK,
        );
        assert_eq!(target, SignOutTarget::Route("/login".to_string()));
    }

    #[test]
    fn test_signed_out_to_external_url_reloads() {
        let target = SignOutTarget::resolve(
            Ok(LogoutOutcome::SignedOut { redirect: "https://sso.test/bye".to_string() }),
            FALLBACK,
        );
        assert_eq!(target, SignOutTarget::Page("https://sso.test/bye".to_string()));
    }

    #[test]
    fn test_fallback_forces_page_navigation() {
        let target = SignOutTarget::resolve(
            Ok(LogoutOutcome::Fallback {
                redirect: "https://auth.test/login".to_string(),
                reason: "Auth service timed out".to_string(),
            }),
            FALLBACK,
        );
        assert_eq!(target, SignOutTarget::Page("https://auth.test/login".to_string()));
    }

    #[test]
    fn test_unreachable_api_uses_local_fallback() {
        let target = SignOutTarget::resolve(Err("Network error".to_string()), FALLBACK);
        assert_eq!(target, SignOutTarget::Page(FALLBACK.to_string()));
    }
}

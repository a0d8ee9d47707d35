//! Auth service logout client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{SessionError, SessionProvider};

/// Ends sessions by calling the auth service over HTTP
pub struct HttpSessionProvider {
    client: Client,
    logout_url: String,
}

impl HttpSessionProvider {
    pub fn new(logout_url: impl Into<String>, timeout_ms: u64) -> Result<Self, SessionError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| SessionError::Request(e.to_string()))?;

        Ok(Self {
            client,
            logout_url: logout_url.into(),
        })
    }

    pub fn logout_url(&self) -> &str {
        &self.logout_url
    }
}

#[async_trait]
impl SessionProvider for HttpSessionProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn logout(&self) -> Result<(), SessionError> {
        let response = self
            .client
            .post(&self.logout_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SessionError::Timeout
                } else if e.is_connect() {
                    SessionError::Unavailable
                } else {
                    SessionError::Request(e.to_string())
                }
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(SessionError::Rejected {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_auth_service_fails() {
        // Port 9 (discard) on localhost is not listening in test environments
        let provider = HttpSessionProvider::new("http://127.0.0.1:9/logout", 500).unwrap();
        assert_eq!(provider.logout_url(), "http://127.0.0.1:9/logout");
        assert!(provider.logout().await.is_err());
    }
}

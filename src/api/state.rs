//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::aggregate::{DistributionCache, Distribution};
use crate::company::CompanyRegistry;
use crate::config::ApiConfig;
use crate::shell::Shell;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Company records
    pub registry: Arc<CompanyRegistry>,
    /// Memo of the last computed distribution
    pub cache: Arc<DistributionCache>,
    /// Navigation/session shell
    pub shell: Arc<Shell>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(registry: Arc<CompanyRegistry>, shell: Arc<Shell>, config: ApiConfig) -> Self {
        Self {
            registry,
            cache: Arc::new(DistributionCache::new()),
            shell,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Distribution of the current record list, memoized per snapshot
    pub async fn distribution(&self) -> Arc<Distribution> {
        let snapshot = self.registry.snapshot().await;
        self.cache.get_or_compute(&snapshot)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

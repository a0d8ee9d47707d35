//! Distribution memo
//!
//! Re-renders ask for the same distribution many times between writes.
//! The cache remembers the last snapshot it aggregated and hands back the
//! same result while that snapshot is still the one presented. Identity is
//! pointer identity of the `Arc<[Company]>`; the registry publishes a new
//! allocation on every write, so a stale hit cannot happen.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use super::Distribution;
use crate::company::Company;

struct CacheSlot {
    // Holding the snapshot keeps its address from being reused.
    records: Arc<[Company]>,
    distribution: Arc<Distribution>,
}

/// Single-entry memo of the last computed distribution
#[derive(Default)]
pub struct DistributionCache {
    slot: Mutex<Option<CacheSlot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl DistributionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the distribution for `records`, computing it only when a
    /// different snapshot is presented.
    pub fn get_or_compute(&self, records: &Arc<[Company]>) -> Arc<Distribution> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = slot.as_ref() {
            if Arc::ptr_eq(&cached.records, records) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Arc::clone(&cached.distribution);
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let distribution = Arc::new(Distribution::from_records(records));

        tracing::debug!(
            records = records.len(),
            industries = distribution.industry.len(),
            statuses = distribution.status.len(),
            "Recomputed distribution"
        );

        *slot = Some(CacheSlot {
            records: Arc::clone(records),
            distribution: Arc::clone(&distribution),
        });

        distribution
    }

    /// Drop the memoized result
    pub fn invalidate(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

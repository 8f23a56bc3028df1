//! In-process forecast cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore, Clock, ForecastCache, SystemClock};
use crate::error::CacheError;
use crate::models::NormalizedForecast;

/// [`ForecastCache`] backed by a locked [`CacheStore`].
///
/// Reads take the write lock because a read updates LRU order and counters.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore<NormalizedForecast>>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    /// Creates a cache on the system clock.
    pub fn new(max_entries: usize) -> Self {
        Self::with_clock(max_entries, Arc::new(SystemClock))
    }

    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(max_entries: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(max_entries))),
            clock,
        }
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Drops every expired forecast, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let now = self.clock.now();
        self.store.write().await.cleanup_expired(now)
    }
}

#[async_trait]
impl ForecastCache for MemoryCache {
    async fn read(&self, key: &str) -> Result<Option<NormalizedForecast>, CacheError> {
        let now = self.clock.now();
        Ok(self.store.write().await.get(key, now))
    }

    async fn write(
        &self,
        key: &str,
        value: NormalizedForecast,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let now = self.clock.now();
        self.store.write().await.set(key, value, ttl, now)
    }
}

//! Cache backend trait.
//!
//! The fetcher only sees this capability, so the backing store can be the
//! in-process [`MemoryCache`](super::MemoryCache) or a networked service.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheError;
use crate::models::NormalizedForecast;

/// Read/write access to cached forecasts keyed by postal code.
///
/// Implementations must be safe to share across tasks. Expired values must
/// never be returned from `read`.
#[async_trait]
pub trait ForecastCache: Send + Sync {
    /// Returns the fresh forecast stored for `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<NormalizedForecast>, CacheError>;

    /// Stores `value` under `key` for `ttl`, replacing any previous value.
    async fn write(
        &self,
        key: &str,
        value: NormalizedForecast,
        ttl: Duration,
    ) -> Result<(), CacheError>;
}

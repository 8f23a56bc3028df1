//! Forecast Cache Orchestrator
//!
//! Serves a postal code's forecast from the cache while it is fresh and
//! otherwise fetches it from the weather source and caches the result.
//!
//! Concurrent misses for the same postal code are collapsed into a single
//! provider call: the first caller fetches, the others take the per-key lock
//! after it and read what it cached. The cache is optional for correctness: if it
//! fails, lookups fall through to the provider.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::{debug, error, info, instrument, warn};

use crate::cache::ForecastCache;
use crate::error::FetchError;
use crate::models::NormalizedForecast;
use crate::weather::ForecastSource;

/// Default lifetime of a cached forecast.
pub const DEFAULT_FORECAST_TTL: Duration = Duration::from_secs(30 * 60);

/// A forecast and whether it came from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastLookup {
    pub forecast: NormalizedForecast,
    pub cached: bool,
}

pub struct ForecastFetcher {
    source: Arc<dyn ForecastSource>,
    cache: Arc<dyn ForecastCache>,
    ttl: Duration,
    in_flight: InFlight,
    provider_calls: AtomicU64,
    /// Bumped after every cache write attempt by a fetch.
    stores: AtomicU64,
}

impl ForecastFetcher {
    pub fn new(
        source: Arc<dyn ForecastSource>,
        cache: Arc<dyn ForecastCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            source,
            cache,
            ttl,
            in_flight: InFlight::default(),
            provider_calls: AtomicU64::new(0),
            stores: AtomicU64::new(0),
        }
    }

    /// Returns the forecast for `postal_code`, from the cache when fresh.
    pub async fn get_or_fetch(&self, postal_code: &str) -> Result<NormalizedForecast, FetchError> {
        self.lookup(postal_code).await.map(|lookup| lookup.forecast)
    }

    /// Like [`get_or_fetch`](Self::get_or_fetch), also reporting whether
    /// the cache answered.
    #[instrument(skip(self), level = "debug")]
    pub async fn lookup(&self, postal_code: &str) -> Result<ForecastLookup, FetchError> {
        let stores_seen = self.stores.load(Ordering::Acquire);
        if let Some(forecast) = self.read_cache(postal_code).await {
            debug!("Cache hit for {}", postal_code);
            return Ok(ForecastLookup {
                forecast,
                cached: true,
            });
        }

        let key_lock = self.in_flight.acquire(postal_code);
        let (_guard, waited) = match key_lock.lock.try_lock() {
            Ok(guard) => (guard, false),
            Err(_) => (key_lock.lock.lock().await, true),
        };

        // A fetch that finished between the first read and taking the lock
        // released it before we got here, so `waited` alone misses it.
        if waited || self.stores.load(Ordering::Acquire) != stores_seen {
            if let Some(forecast) = self.read_cache(postal_code).await {
                debug!("Cache filled by concurrent fetch for {}", postal_code);
                return Ok(ForecastLookup {
                    forecast,
                    cached: true,
                });
            }
        }

        let forecast = self.fetch_and_store(postal_code).await?;
        Ok(ForecastLookup {
            forecast,
            cached: false,
        })
    }

    /// Number of calls made to the weather source so far.
    pub fn provider_calls(&self) -> u64 {
        self.provider_calls.load(Ordering::Relaxed)
    }

    /// How long fetched forecasts stay cached.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn read_cache(&self, postal_code: &str) -> Option<NormalizedForecast> {
        match self.cache.read(postal_code).await {
            Ok(found) => found,
            Err(err) => {
                warn!("Cache read failed for {}, fetching instead: {}", postal_code, err);
                None
            }
        }
    }

    async fn fetch_and_store(&self, postal_code: &str) -> Result<NormalizedForecast, FetchError> {
        info!("Cache miss for {}, fetching forecast", postal_code);
        self.provider_calls.fetch_add(1, Ordering::Relaxed);

        let forecast = self.source.fetch_raw(postal_code).await.map_err(|err| {
            error!("Weather API request failed for {}: {}", postal_code, err);
            err
        })?;

        if let Err(err) = self
            .cache
            .write(postal_code, forecast.clone(), self.ttl)
            .await
        {
            warn!("Cache write failed for {}: {}", postal_code, err);
        }
        self.stores.fetch_add(1, Ordering::Release);

        Ok(forecast)
    }
}

// == In-flight Locks ==
type KeyMutex = Arc<tokio::sync::Mutex<()>>;

/// Per-postal-code locks for fetches in progress.
#[derive(Default)]
struct InFlight {
    locks: Mutex<HashMap<String, KeyMutex>>,
}

impl InFlight {
    fn acquire(&self, key: &str) -> KeyLock<'_> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        let lock = locks.entry(key.to_string()).or_default().clone();
        KeyLock {
            owner: self,
            key: key.to_string(),
            lock,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Handle on a key's lock; the map entry goes away with its last handle.
struct KeyLock<'a> {
    owner: &'a InFlight,
    key: String,
    lock: KeyMutex,
}

impl Drop for KeyLock<'_> {
    fn drop(&mut self) {
        let mut locks = self
            .owner
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let last_handle = locks
            .get(&self.key)
            .is_some_and(|held| Arc::ptr_eq(held, &self.lock) && Arc::strong_count(held) == 2);
        if last_handle {
            locks.remove(&self.key);
        }
    }
}

//! Cache Store Module
//!
//! Keyed storage combining a HashMap with LRU capacity eviction and passive
//! TTL expiry. Not synchronized; [`MemoryCache`](super::MemoryCache) wraps it
//! in a lock.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_KEY_LENGTH};
use crate::error::CacheError;

// == Cache Store ==
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: HashMap<String, CacheEntry<V>>,
    lru: LruTracker,
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl<V: Clone> CacheStore<V> {
    /// Creates an empty store holding at most `max_entries` values.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
        }
    }

    // == Set ==
    /// Stores `value` under `key` until `now + ttl`.
    ///
    /// Overwrites any previous entry for the key. When the store is full the
    /// least recently used entry is evicted first.
    pub fn set(
        &mut self,
        key: &str,
        value: V,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<(), CacheError> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::Rejected(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if !self.entries.contains_key(key) && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.entries
            .insert(key.to_string(), CacheEntry::new(value, now, ttl));
        self.lru.touch(key);
        Ok(())
    }

    // == Get ==
    /// Returns a copy of the value if present and not expired at `now`.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str, now: DateTime<Utc>) -> Option<V> {
        let fresh = self
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.value.clone());

        if fresh.is_some() {
            self.lru.touch(key);
        } else if self.entries.contains_key(key) {
            self.remove(key);
        }
        self.stats.record_read(fresh.is_some());
        fresh
    }

    // == Cleanup Expired ==
    /// Removes every entry expired at `now`, returning how many were dropped.
    pub fn cleanup_expired(&mut self, now: DateTime<Utc>) -> usize {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.remove(key);
        }
        expired.len()
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            ..self.stats.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.lru.remove(key);
    }
}

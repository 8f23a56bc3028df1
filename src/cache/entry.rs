//! Cache Entry Module
//!
//! A stored value with the absolute time it stops being served.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::clock::expiry_after;

// == Cache Entry ==
/// A single cached value. Immutable once written; a newer write replaces it.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// Creates an entry written at `now` that lives for `ttl`.
    pub fn new(value: V, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: expiry_after(now, ttl),
        }
    }

    // == Is Expired ==
    /// An entry is expired once `now` reaches its expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

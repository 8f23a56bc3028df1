//! Cache Module
//!
//! Time-bounded forecast caching: the [`ForecastCache`] capability and an
//! in-memory implementation with TTL expiry and LRU eviction.

mod clock;
mod entry;
mod lru;
mod memory;
mod stats;
mod store;
mod traits;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use memory::MemoryCache;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use traits::ForecastCache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired forecasts out of the
//! in-memory cache. Reads already ignore expired entries; the sweep only
//! keeps memory from holding postal codes nobody asks for again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that removes expired forecasts every
/// `cleanup_interval_secs` seconds.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(cache: MemoryCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting forecast cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;
            if removed > 0 {
                info!("Forecast cleanup: removed {} expired entries", removed);
            } else {
                debug!("Forecast cleanup: no expired entries found");
            }
        }
    })
}

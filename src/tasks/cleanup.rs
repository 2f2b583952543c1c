//! TTL Cleanup Task
//!
//! Sweeps expired keys out of the in-process cache so they stop counting
//! against its capacity.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns the sweep loop for `cache`.
///
/// # Arguments
/// * `cache` - handle sharing state with the one the services use
/// * `interval_secs` - Seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(cache: MemoryCache, interval_secs: u64) -> JoinHandle<()> {
    let period = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!("Cache TTL sweep running every {} seconds", interval_secs);

        loop {
            tokio::time::sleep(period).await;

            match cache.purge_expired().await {
                0 => debug!("TTL sweep found nothing to drop"),
                purged => info!(purged, "TTL sweep dropped expired keys"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheClient, CacheStore};

    #[tokio::test]
    async fn test_sweep_drops_only_expired_keys() {
        let mut store = CacheStore::new(100, None);
        store.set("otp:user@x.io", "123456".to_string(), Some(1)).unwrap();
        let cache = MemoryCache::from_store(store);
        cache.set("tags", "[]".to_string()).await.unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);
        tokio::time::sleep(Duration::from_millis(2500)).await;
        handle.abort();

        let stats = cache.stats().await.unwrap();
        assert_eq!(stats.total_entries, 1, "Only the key without TTL should remain");
        assert_eq!(stats.misses, 0, "Sweeping is not a read");
    }
}

//! Cache Client Module
//!
//! The async key-value interface the repositories talk to, and its
//! in-process implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore, Versioned};
use crate::error::Result;

/// Key-value cache used for derived, disposable views.
///
/// Implementations must keep a per-key version that changes on every write so
/// callers can perform optimistic read-modify-write cycles.
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Reads a key along with its current version.
    async fn get(&self, key: &str) -> Result<Option<Versioned>>;

    /// Unconditionally writes a key and returns its new version.
    async fn set(&self, key: &str, value: String) -> Result<u64>;

    /// Writes a key only if it still holds `expected_version`.
    ///
    /// Returns false when another writer got there first.
    async fn compare_and_set(&self, key: &str, expected_version: u64, value: String)
        -> Result<bool>;

    /// Hit/miss counters, when the backend exposes them.
    async fn stats(&self) -> Option<CacheStats> {
        None
    }
}

// == Memory Cache ==
/// In-process [`CacheClient`] backed by a shared [`CacheStore`].
#[derive(Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    pub fn new(max_entries: usize, default_ttl: Option<u64>) -> Self {
        Self::from_store(CacheStore::new(max_entries, default_ttl))
    }

    pub fn from_store(store: CacheStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Drops every expired key; returns how many went.
    pub async fn purge_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }
}

#[async_trait]
impl CacheClient for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Versioned>> {
        // Write lock: reads update LRU order and stats
        Ok(self.store.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<u64> {
        self.store.write().await.set(key, value, None)
    }

    async fn compare_and_set(
        &self,
        key: &str,
        expected_version: u64,
        value: String,
    ) -> Result<bool> {
        let written = self
            .store
            .write()
            .await
            .compare_and_set(key, expected_version, value)?;
        Ok(written.is_some())
    }

    async fn stats(&self) -> Option<CacheStats> {
        Some(self.store.read().await.stats())
    }
}

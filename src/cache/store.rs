//! Cache Store Module
//!
//! In-process cache engine: HashMap storage with LRU eviction, optional TTL
//! and per-key versions for compare-and-set.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{AppError, Result};

/// A cached value together with the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned {
    pub value: String,
    pub version: u64,
}

// == Cache Store ==
#[derive(Debug)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    stats: CacheStats,
    max_entries: usize,
    default_ttl: Option<u64>,
    /// Source of version stamps; never reused, even across evictions
    next_version: u64,
}

impl CacheStore {
    /// Creates a store holding at most `max_entries` keys.
    ///
    /// Keys written without an explicit TTL use `default_ttl`, or never
    /// expire when it is None.
    pub fn new(max_entries: usize, default_ttl: Option<u64>) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::default(),
            max_entries: max_entries.max(1),
            default_ttl,
            next_version: 0,
        }
    }

    // == Set ==
    /// Unconditionally stores `value` under `key` and returns the new version.
    ///
    /// Evicts the least recently used key when inserting a new key at capacity.
    pub fn set(&mut self, key: &str, value: String, ttl: Option<u64>) -> Result<u64> {
        validate(key, &value)?;

        if !self.entries.contains_key(key) && self.entries.len() >= self.max_entries {
            let evicted = self.lru.pop_least_recent().ok_or_else(|| {
                AppError::Cache("cache is full and eviction failed".to_string())
            })?;
            self.entries.remove(&evicted);
            self.stats.record_eviction();
        }

        self.next_version += 1;
        let version = self.next_version;
        let entry = CacheEntry::new(value, version, ttl.or(self.default_ttl));
        self.entries.insert(key.to_string(), entry);
        self.lru.mark_used(key);

        Ok(version)
    }

    // == Compare And Set ==
    /// Stores `value` only if the key still holds `expected_version`.
    ///
    /// Returns the new version on success, None when the key changed, expired
    /// or disappeared since it was read.
    pub fn compare_and_set(
        &mut self,
        key: &str,
        expected_version: u64,
        value: String,
    ) -> Result<Option<u64>> {
        validate(key, &value)?;

        let current = self.live_entry(key).map(|entry| entry.version);

        if current != Some(expected_version) {
            self.stats.record_cas_conflict();
            return Ok(None);
        }

        self.set(key, value, None).map(Some)
    }

    // == Get ==
    /// Returns the live value for `key`, or None when missing or expired.
    pub fn get(&mut self, key: &str) -> Option<Versioned> {
        match self.live_entry(key) {
            Some(entry) => {
                let found = Versioned {
                    value: entry.value.clone(),
                    version: entry.version,
                };
                self.stats.record_read(true);
                self.lru.mark_used(key);
                Some(found)
            }
            None => {
                self.stats.record_read(false);
                None
            }
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.entries.remove(key);
            self.lru.forget(key);
        }

        expired.len()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            ..self.stats
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops the key if it has expired, then returns whatever is left.
    fn live_entry(&mut self, key: &str) -> Option<&CacheEntry> {
        if self.entries.get(key).is_some_and(CacheEntry::is_expired) {
            self.entries.remove(key);
            self.lru.forget(key);
        }
        self.entries.get(key)
    }
}

fn validate(key: &str, value: &str) -> Result<()> {
    if key.is_empty() {
        return Err(AppError::InvalidRequest("cache key cannot be empty".into()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(AppError::InvalidRequest(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    if value.len() > MAX_VALUE_SIZE {
        return Err(AppError::Cache(format!(
            "Value exceeds maximum size of {} bytes",
            MAX_VALUE_SIZE
        )));
    }
    Ok(())
}

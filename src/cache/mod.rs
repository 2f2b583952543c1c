//! Cache Module
//!
//! Key-value cache abstraction plus an in-memory backend with TTL expiration,
//! LRU eviction and versioned compare-and-set, and a Redis backend for
//! deployments that share one cache.

mod client;
mod entry;
mod lru;
mod redis_cache;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

pub use client::{CacheClient, MemoryCache};
pub use entry::CacheEntry;
pub(crate) use lru::LruTracker;
pub use redis_cache::{RedisCache, VERSION_COUNTER_KEY};
pub use stats::CacheStats;
pub use store::{CacheStore, Versioned};

/// Longest key a store accepts, in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Largest value a store accepts, in bytes
pub const MAX_VALUE_SIZE: usize = 8 * 1024 * 1024;

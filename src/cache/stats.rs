//! Cache Statistics Module
//!
//! Counters for reads, evictions and rejected compare-and-set writes.

use serde::Serialize;

/// Running counters kept by a [`CacheStore`](super::CacheStore).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Reads that found a live value
    pub hits: u64,
    /// Reads that found nothing or an expired value
    pub misses: u64,
    /// Keys dropped to make room
    pub evictions: u64,
    /// Compare-and-set writes rejected because the version had moved
    pub cas_conflicts: u64,
    /// Keys currently held
    pub total_entries: usize,
}

impl CacheStats {
    /// Share of reads that hit, 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            reads => self.hits as f64 / reads as f64,
        }
    }

    pub(crate) fn record_read(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_cas_conflict(&mut self) {
        self.cas_conflicts += 1;
    }
}

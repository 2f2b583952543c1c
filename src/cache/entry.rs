//! Cache Entry Module
//!
//! A single cached value with its version and optional deadline.

use std::time::{Duration, Instant};

/// A stored value plus the metadata the store needs to expire and
/// version it.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: String,
    /// Version stamp, bumped on every write to the key
    pub version: u64,
    /// Deadline after which reads treat the entry as absent
    pub deadline: Option<Instant>,
}

impl CacheEntry {
    /// Wraps `value` at `version`, expiring `ttl_seconds` from now when given.
    pub fn new(value: String, version: u64, ttl_seconds: Option<u64>) -> Self {
        Self {
            value,
            version,
            deadline: ttl_seconds.map(|ttl| Instant::now() + Duration::from_secs(ttl)),
        }
    }

    /// Expired once the deadline has been reached.
    pub fn is_expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_without_ttl_lives_forever() {
        let entry = CacheEntry::new("[]".to_string(), 1, None);

        assert_eq!(entry.version, 1);
        assert!(!entry.is_expired());
        assert!(entry.deadline.is_none());
    }

    #[test]
    fn test_entry_ttl_sets_future_deadline() {
        let before = Instant::now();
        let entry = CacheEntry::new("[]".to_string(), 3, Some(10));

        let deadline = entry.deadline.unwrap();
        assert!(deadline >= before + Duration::from_secs(10));
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_past_deadline() {
        let entry = CacheEntry {
            value: "[]".to_string(),
            version: 2,
            deadline: Some(Instant::now()),
        };

        assert!(entry.is_expired(), "Deadline itself counts as expired");
    }
}

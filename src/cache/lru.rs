//! Recency Tracking
//!
//! Decides which key the store gives up when it is full.

use std::collections::{BTreeMap, HashMap};

/// Least-recently-used ordering over cache keys.
///
/// Every use stamps the key with a fresh tick; the smallest tick is the
/// eviction candidate.
#[derive(Debug, Default)]
pub struct LruTracker {
    clock: u64,
    stamps: HashMap<String, u64>,
    by_stamp: BTreeMap<u64, String>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a use of `key`, making it the most recent.
    pub fn mark_used(&mut self, key: &str) {
        self.forget(key);
        self.clock += 1;
        self.stamps.insert(key.to_owned(), self.clock);
        self.by_stamp.insert(self.clock, key.to_owned());
    }

    /// Stops tracking `key`; unknown keys are ignored.
    pub fn forget(&mut self, key: &str) {
        if let Some(stamp) = self.stamps.remove(key) {
            self.by_stamp.remove(&stamp);
        }
    }

    /// Removes and returns the key used longest ago.
    pub fn pop_least_recent(&mut self) -> Option<String> {
        let (_, key) = self.by_stamp.pop_first()?;
        self.stamps.remove(&key);
        Some(key)
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(tracker: &mut LruTracker) -> Vec<String> {
        std::iter::from_fn(|| tracker.pop_least_recent()).collect()
    }

    #[test]
    fn test_reuse_moves_key_to_back() {
        let mut tracker = LruTracker::new();
        for key in ["tags", "otp", "session", "tags"] {
            tracker.mark_used(key);
        }

        assert_eq!(drain(&mut tracker), vec!["otp", "session", "tags"]);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_repeated_use_tracks_once() {
        let mut tracker = LruTracker::new();
        tracker.mark_used("tags");
        tracker.mark_used("tags");

        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_forget() {
        let mut tracker = LruTracker::new();
        tracker.mark_used("tags");
        tracker.mark_used("otp");
        tracker.forget("tags");
        tracker.forget("never-seen");

        assert_eq!(drain(&mut tracker), vec!["otp"]);
    }
}

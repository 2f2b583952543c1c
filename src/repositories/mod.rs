//! Repositories
//!
//! Data access that spans more than one backing store.

mod tag;

pub use tag::{AppendOutcome, TagRepository, MAX_APPEND_ATTEMPTS, TAG_CACHE_KEY};

//! Tag Repository
//!
//! Mediates between the document store and the cached tag snapshot.
//!
//! The snapshot is a JSON array of `{_id, tag}` under [`TAG_CACHE_KEY`]. It is
//! kept in step with the store on a best-effort basis only: a crash between
//! the store insert and the cache append leaves it one tag behind until the
//! next [`TagRepository::reinitialize_cache`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::CacheClient;
use crate::error::{AppError, Result};
use crate::models::Tag;
use crate::store::TagStore;

/// Cache key holding the full tag snapshot.
pub const TAG_CACHE_KEY: &str = "tags";

/// Attempts at the optimistic snapshot append before giving up.
pub const MAX_APPEND_ATTEMPTS: usize = 5;

/// Result of appending one tag to the cached snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    /// No snapshot cached; the next read rebuilds it from the store
    NoSnapshot,
    /// The snapshot kept changing under us
    Contended,
}

pub struct TagRepository {
    store: Arc<dyn TagStore>,
    cache: Arc<dyn CacheClient>,
}

impl TagRepository {
    pub fn new(store: Arc<dyn TagStore>, cache: Arc<dyn CacheClient>) -> Self {
        Self { store, cache }
    }

    /// Inserts a new tag into the document store.
    pub async fn create_tag(&self, text: &str) -> Result<Tag> {
        self.store.insert_tag(Tag::new(text)).await
    }

    // == Add Tag In Cache ==
    /// Appends `tag` to the cached snapshot.
    ///
    /// Read-modify-write guarded by compare-and-set on the snapshot version,
    /// so concurrent appends cannot overwrite each other.
    pub async fn add_tag_in_cache(&self, tag: &Tag) -> Result<AppendOutcome> {
        for attempt in 1..=MAX_APPEND_ATTEMPTS {
            let Some(current) = self.cache.get(TAG_CACHE_KEY).await? else {
                return Ok(AppendOutcome::NoSnapshot);
            };

            let mut tags: Vec<Tag> = serde_json::from_str(&current.value)
                .map_err(|e| AppError::Cache(format!("corrupt tag snapshot: {}", e)))?;
            tags.push(tag.clone());
            let updated = serde_json::to_string(&tags)?;

            if self
                .cache
                .compare_and_set(TAG_CACHE_KEY, current.version, updated)
                .await?
            {
                return Ok(AppendOutcome::Appended);
            }
            debug!(attempt, "Tag snapshot changed during append, retrying");
        }

        Ok(AppendOutcome::Contended)
    }

    /// Overwrites the snapshot with `tags`.
    pub async fn populate_tags_in_cache(&self, tags: &[Tag]) -> Result<()> {
        let value = serde_json::to_string(tags)?;
        self.cache.set(TAG_CACHE_KEY, value).await?;
        Ok(())
    }

    /// Full scan of the document store.
    pub async fn get_tags_from_db(&self) -> Result<Vec<Tag>> {
        self.store.find_tags().await
    }

    /// Reads and parses the snapshot.
    ///
    /// A snapshot that does not parse is reported as absent so callers fall
    /// back to the store.
    pub async fn get_tags_from_cache(&self) -> Result<Option<Vec<Tag>>> {
        let Some(cached) = self.cache.get(TAG_CACHE_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&cached.value) {
            Ok(tags) => Ok(Some(tags)),
            Err(e) => {
                warn!(error = %e, "Discarding unparseable tag snapshot");
                Ok(None)
            }
        }
    }

    // == Reinitialize Cache ==
    /// Rebuilds the snapshot from a full store scan, whatever it held before.
    ///
    /// Returns the number of tags written.
    pub async fn reinitialize_cache(&self) -> Result<usize> {
        let tags = self.get_tags_from_db().await?;
        self.populate_tags_in_cache(&tags).await?;
        Ok(tags.len())
    }
}

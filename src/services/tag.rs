//! Tag Service
//!
//! Decides when tags are served from the cached snapshot and when the
//! document store is consulted.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::models::{validate_tag_text, Tag};
use crate::repositories::{AppendOutcome, TagRepository};

pub struct TagService {
    repository: Arc<TagRepository>,
}

impl TagService {
    pub fn new(repository: Arc<TagRepository>) -> Self {
        Self { repository }
    }

    // == Create Tag ==
    /// Validates and stores a new tag, then appends it to the cached snapshot.
    ///
    /// A store failure is returned to the caller. A cache failure is only
    /// logged: the tag is already durable and reconciliation repairs the cache.
    pub async fn create_tag(&self, text: &str) -> Result<Tag> {
        if let Some(msg) = validate_tag_text(text) {
            return Err(AppError::InvalidRequest(msg));
        }

        let tag = self.repository.create_tag(text.trim()).await?;

        match self.repository.add_tag_in_cache(&tag).await {
            Ok(AppendOutcome::Appended) => debug!(tag = %tag.tag, "Tag appended to cache"),
            Ok(AppendOutcome::NoSnapshot) => {
                debug!(tag = %tag.tag, "No tag snapshot cached, skipping append")
            }
            Ok(AppendOutcome::Contended) => {
                warn!(tag = %tag.tag, "Gave up appending tag to contended snapshot")
            }
            Err(e) => warn!(tag = %tag.tag, error = %e, "Failed to append tag to cache"),
        }

        Ok(tag)
    }

    // == Get All Tags ==
    /// Serves the snapshot when it is cached and non-empty, otherwise scans
    /// the store and repopulates the cache with the result.
    pub async fn get_all_tags(&self) -> Result<Vec<Tag>> {
        match self.repository.get_tags_from_cache().await {
            Ok(Some(tags)) if !tags.is_empty() => {
                debug!(count = tags.len(), "Serving tags from cache");
                return Ok(tags);
            }
            Ok(_) => debug!("Tag cache empty, serving from store"),
            Err(e) => warn!(error = %e, "Tag cache read failed, serving from store"),
        }

        let tags = self.repository.get_tags_from_db().await?;

        if let Err(e) = self.repository.populate_tags_in_cache(&tags).await {
            warn!(error = %e, "Failed to repopulate tag cache");
        }

        Ok(tags)
    }

    // == Reinitialize Cache ==
    /// Rebuilds the snapshot from the store. Errors are returned so the
    /// scheduler can log them.
    pub async fn reinitialize_cache(&self) -> Result<usize> {
        let count = self.repository.reinitialize_cache().await?;
        info!(count, "Tag cache rebuilt from store");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheClient, MemoryCache, Versioned};
    use crate::models::tag::MAX_TAG_LENGTH;
    use crate::repositories::TAG_CACHE_KEY;
    use crate::store::{MemoryDocumentStore, TagStore};
    use std::collections::HashSet;

    struct Fixture {
        service: TagService,
        store: Arc<MemoryDocumentStore>,
        cache: MemoryCache,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryDocumentStore::new());
        let cache = MemoryCache::new(100, None);
        let repository = TagRepository::new(store.clone(), Arc::new(cache.clone()));
        Fixture {
            service: TagService::new(Arc::new(repository)),
            store,
            cache,
        }
    }

    /// Cache whose every call fails, as when the cache server is down.
    struct BrokenCache;

    #[async_trait::async_trait]
    impl CacheClient for BrokenCache {
        async fn get(&self, _key: &str) -> Result<Option<Versioned>> {
            Err(AppError::Cache("connection refused".to_string()))
        }

        async fn set(&self, _key: &str, _value: String) -> Result<u64> {
            Err(AppError::Cache("connection refused".to_string()))
        }

        async fn compare_and_set(
            &self,
            _key: &str,
            _version: u64,
            _value: String,
        ) -> Result<bool> {
            Err(AppError::Cache("connection refused".to_string()))
        }
    }

    fn broken_cache_fixture() -> (TagService, Arc<MemoryDocumentStore>) {
        let store = Arc::new(MemoryDocumentStore::new());
        let repository = TagRepository::new(store.clone(), Arc::new(BrokenCache));
        (TagService::new(Arc::new(repository)), store)
    }

    fn names(tags: &[Tag]) -> HashSet<String> {
        tags.iter().map(|t| t.tag.clone()).collect()
    }

    #[tokio::test]
    async fn test_created_tag_is_listed() {
        let f = fixture();

        f.service.create_tag("x").await.unwrap();
        let tags = f.service.get_all_tags().await.unwrap();

        assert!(names(&tags).contains("x"));
    }

    #[tokio::test]
    async fn test_created_tag_is_trimmed() {
        let f = fixture();

        let tag = f.service.create_tag("  rust ").await.unwrap();

        assert_eq!(tag.tag, "rust");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_and_overlong_tags() {
        let f = fixture();

        let blank = f.service.create_tag("   ").await;
        let long = f.service.create_tag(&"x".repeat(MAX_TAG_LENGTH + 1)).await;

        assert!(matches!(blank, Err(AppError::InvalidRequest(_))));
        assert!(matches!(long, Err(AppError::InvalidRequest(_))));
        assert!(f.store.find_tags().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_accepts_tag_at_max_length() {
        let f = fixture();

        let tag = f.service.create_tag(&"x".repeat(MAX_TAG_LENGTH)).await.unwrap();

        assert_eq!(tag.tag.len(), MAX_TAG_LENGTH);
    }

    #[tokio::test]
    async fn test_create_survives_cache_failure() {
        let (service, store) = broken_cache_fixture();

        let tag = service.create_tag("rust").await.unwrap();

        let stored = store.find_tags().await.unwrap();
        assert_eq!(stored, vec![tag]);
    }

    #[tokio::test]
    async fn test_list_serves_store_when_cache_fails() {
        let (service, store) = broken_cache_fixture();
        store.insert_tag(Tag::new("a")).await.unwrap();
        store.insert_tag(Tag::new("b")).await.unwrap();

        let tags = service.get_all_tags().await.unwrap();

        assert_eq!(names(&tags), names(&store.find_tags().await.unwrap()));
        assert_eq!(tags.len(), 2);
    }

    #[tokio::test]
    async fn test_reinitialize_reports_cache_failure() {
        let (service, store) = broken_cache_fixture();
        store.insert_tag(Tag::new("a")).await.unwrap();

        let result = service.reinitialize_cache().await;

        assert!(matches!(result, Err(AppError::Cache(_))));
    }

    #[tokio::test]
    async fn test_cache_miss_falls_back_to_store_and_populates() {
        let f = fixture();
        f.store.insert_tag(Tag::new("a")).await.unwrap();
        f.store.insert_tag(Tag::new("b")).await.unwrap();

        let tags = f.service.get_all_tags().await.unwrap();

        assert_eq!(names(&tags), names(&f.store.find_tags().await.unwrap()));
        let cached = f.cache.get(TAG_CACHE_KEY).await.unwrap();
        assert!(cached.is_some());
    }

    #[tokio::test]
    async fn test_cache_hit_does_not_see_unsynced_store_writes() {
        let f = fixture();
        f.service.create_tag("a").await.unwrap();
        f.service.get_all_tags().await.unwrap();

        // Written straight to the store, bypassing the cache append
        f.store.insert_tag(Tag::new("hidden")).await.unwrap();

        let tags = f.service.get_all_tags().await.unwrap();
        assert!(!names(&tags).contains("hidden"));

        f.service.reinitialize_cache().await.unwrap();
        let tags = f.service.get_all_tags().await.unwrap();
        assert!(names(&tags).contains("hidden"));
    }

    #[tokio::test]
    async fn test_empty_snapshot_falls_back_to_store() {
        let f = fixture();
        f.cache.set(TAG_CACHE_KEY, "[]".to_string()).await.unwrap();
        f.store.insert_tag(Tag::new("a")).await.unwrap();

        let tags = f.service.get_all_tags().await.unwrap();

        assert_eq!(names(&tags), HashSet::from(["a".to_string()]));
    }

    #[tokio::test]
    async fn test_reinitialize_replaces_any_prior_snapshot() {
        let f = fixture();
        f.store.insert_tag(Tag::new("a")).await.unwrap();
        let ghost = serde_json::to_string(&[Tag::new("ghost")]).unwrap();
        f.cache.set(TAG_CACHE_KEY, ghost).await.unwrap();

        let count = f.service.reinitialize_cache().await.unwrap();
        let tags = f.service.get_all_tags().await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(names(&tags), HashSet::from(["a".to_string()]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_do_not_lose_appends() {
        let f = fixture();
        f.service.create_tag("seed").await.unwrap();
        f.service.get_all_tags().await.unwrap();
        let service = Arc::new(f.service);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move { service.create_tag(&format!("t{}", i)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let tags = service.get_all_tags().await.unwrap();
        assert_eq!(tags.len(), 5);
    }
}

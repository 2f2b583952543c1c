//! Document Store Module
//!
//! The durable source of truth for tags, communities and posts. Each record
//! kind has its own async trait so a database driver can back any of them;
//! [`MemoryDocumentStore`] implements all three in process.

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Community, Post, Reaction, Tag};

pub use memory::MemoryDocumentStore;

#[async_trait]
pub trait TagStore: Send + Sync {
    /// Persists a new tag and returns the stored record.
    async fn insert_tag(&self, tag: Tag) -> Result<Tag>;

    /// Full scan of all tags, in insertion order.
    async fn find_tags(&self) -> Result<Vec<Tag>>;
}

#[async_trait]
pub trait CommunityStore: Send + Sync {
    /// Persists a new community. Fails with a conflict if the name is taken.
    async fn insert_community(&self, community: Community) -> Result<Community>;

    /// All communities, newest first.
    async fn find_communities(&self) -> Result<Vec<Community>>;

    async fn find_community(&self, id: Uuid) -> Result<Option<Community>>;

    /// Communities `user_id` subscribes to, newest first.
    async fn find_communities_by_subscriber(&self, user_id: &str) -> Result<Vec<Community>>;

    /// Adds `user_id` to the subscribers in one atomic update. Adding an
    /// existing subscriber leaves the record untouched.
    async fn add_subscriber(&self, id: Uuid, user_id: &str) -> Result<Community>;

    /// Removes `user_id` from the subscribers in one atomic update.
    async fn remove_subscriber(&self, id: Uuid, user_id: &str) -> Result<Community>;
}

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert_post(&self, post: Post) -> Result<Post>;

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>>;

    /// One window of a community's posts, newest first.
    async fn find_posts_by_community(
        &self,
        community_id: Uuid,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Post>>;

    /// All announcement posts, newest first.
    async fn find_announcements(&self) -> Result<Vec<Post>>;

    /// Toggles `user_id`'s reaction in one atomic update.
    async fn react(&self, id: Uuid, user_id: &str, reaction: Reaction) -> Result<Post>;
}

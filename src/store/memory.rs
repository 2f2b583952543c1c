//! In-process document store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CommunityStore, PostStore, TagStore};
use crate::error::{AppError, Result};
use crate::models::{Community, Post, PostType, Reaction, Tag};

/// Document store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    tags: RwLock<Vec<Tag>>,
    communities: RwLock<HashMap<Uuid, Community>>,
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagStore for MemoryDocumentStore {
    async fn insert_tag(&self, tag: Tag) -> Result<Tag> {
        let mut tags = self.tags.write().await;
        if tags.iter().any(|existing| existing.id == tag.id) {
            return Err(AppError::Persistence(format!("duplicate tag id {}", tag.id)));
        }
        tags.push(tag.clone());
        Ok(tag)
    }

    async fn find_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.read().await.clone())
    }
}

#[async_trait]
impl CommunityStore for MemoryDocumentStore {
    async fn insert_community(&self, community: Community) -> Result<Community> {
        let mut communities = self.communities.write().await;
        let name = community.name.to_lowercase();
        if communities.values().any(|c| c.name.to_lowercase() == name) {
            return Err(AppError::Conflict(format!(
                "community '{}' already exists",
                community.name
            )));
        }
        communities.insert(community.id, community.clone());
        Ok(community)
    }

    async fn find_communities(&self) -> Result<Vec<Community>> {
        let communities = self.communities.read().await;
        Ok(newest_first(communities.values().cloned().collect()))
    }

    async fn find_community(&self, id: Uuid) -> Result<Option<Community>> {
        Ok(self.communities.read().await.get(&id).cloned())
    }

    async fn find_communities_by_subscriber(&self, user_id: &str) -> Result<Vec<Community>> {
        let communities = self.communities.read().await;
        let subscribed = communities
            .values()
            .filter(|c| c.is_subscribed(user_id))
            .cloned()
            .collect();
        Ok(newest_first(subscribed))
    }

    async fn add_subscriber(&self, id: Uuid, user_id: &str) -> Result<Community> {
        let mut communities = self.communities.write().await;
        let community = communities
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("community {}", id)))?;
        community.add_subscriber(user_id);
        Ok(community.clone())
    }

    async fn remove_subscriber(&self, id: Uuid, user_id: &str) -> Result<Community> {
        let mut communities = self.communities.write().await;
        let community = communities
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("community {}", id)))?;
        community.remove_subscriber(user_id);
        Ok(community.clone())
    }
}

#[async_trait]
impl PostStore for MemoryDocumentStore {
    async fn insert_post(&self, post: Post) -> Result<Post> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn find_posts_by_community(
        &self,
        community_id: Uuid,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        let in_community = posts
            .values()
            .filter(|p| p.community_id == Some(community_id))
            .cloned()
            .collect();
        Ok(newest_first(in_community)
            .into_iter()
            .skip(skip)
            .take(limit)
            .collect())
    }

    async fn find_announcements(&self) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        let announcements = posts
            .values()
            .filter(|p| p.post_type == PostType::Announcement)
            .cloned()
            .collect();
        Ok(newest_first(announcements))
    }

    async fn react(&self, id: Uuid, user_id: &str, reaction: Reaction) -> Result<Post> {
        let mut posts = self.posts.write().await;
        let post = posts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("post {}", id)))?;
        post.react(user_id, reaction);
        Ok(post.clone())
    }
}

/// Records that can be ordered by creation time.
trait Created {
    fn created_key(&self) -> (chrono::DateTime<chrono::Utc>, Uuid);
}

impl Created for Community {
    fn created_key(&self) -> (chrono::DateTime<chrono::Utc>, Uuid) {
        (self.created_at, self.id)
    }
}

impl Created for Post {
    fn created_key(&self) -> (chrono::DateTime<chrono::Utc>, Uuid) {
        (self.created_at, self.id)
    }
}

fn newest_first<T: Created>(mut records: Vec<T>) -> Vec<T> {
    records.sort_by(|a, b| b.created_key().cmp(&a.created_key()));
    records
}

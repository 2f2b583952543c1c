//! Post Service

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::requests::validate_post_data;
use crate::models::{CreateAnnouncementRequest, CreatePostRequest, Post, PostType, Reaction};
use crate::store::{CommunityStore, PostStore};

pub struct PostService {
    posts: Arc<dyn PostStore>,
    communities: Arc<dyn CommunityStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, communities: Arc<dyn CommunityStore>) -> Self {
        Self { posts, communities }
    }

    /// Creates a general post, optionally inside a community the author
    /// subscribes to.
    pub async fn create_post(&self, req: CreatePostRequest, user_id: &str) -> Result<Post> {
        if let Some(msg) = validate_post_data(&req.data) {
            return Err(AppError::InvalidRequest(msg));
        }

        if let Some(community_id) = req.community_id {
            let community = self
                .communities
                .find_community(community_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("community {}", community_id)))?;
            if !community.is_subscribed(user_id) {
                return Err(AppError::Forbidden(
                    "Subscribe to the community before posting in it".to_string(),
                ));
            }
        }

        let post = Post::new(req.data, req.community_id, user_id, PostType::General);
        let post = self.posts.insert_post(post).await?;
        info!(id = %post.id, user = %user_id, "Post created");
        Ok(post)
    }

    pub async fn create_announcement(
        &self,
        req: CreateAnnouncementRequest,
        admin_id: &str,
    ) -> Result<Post> {
        if let Some(msg) = validate_post_data(&req.data) {
            return Err(AppError::InvalidRequest(msg));
        }

        let post = Post::new(req.data, None, admin_id, PostType::Announcement);
        let post = self.posts.insert_post(post).await?;
        info!(id = %post.id, "Announcement created");
        Ok(post)
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post> {
        self.posts
            .find_post(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {}", id)))
    }

    pub async fn list_announcements(&self) -> Result<Vec<Post>> {
        self.posts.find_announcements().await
    }

    /// Toggles the user's reaction on a post and returns the updated post.
    pub async fn react(&self, id: Uuid, user_id: &str, reaction: Reaction) -> Result<Post> {
        self.posts.react(id, user_id, reaction).await
    }
}

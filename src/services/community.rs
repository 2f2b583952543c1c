//! Community Service

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Community, CommunityPage, CreateCommunityRequest};
use crate::store::{CommunityStore, PostStore};

pub struct CommunityService {
    communities: Arc<dyn CommunityStore>,
    posts: Arc<dyn PostStore>,
    page_size: usize,
}

impl CommunityService {
    pub fn new(
        communities: Arc<dyn CommunityStore>,
        posts: Arc<dyn PostStore>,
        page_size: usize,
    ) -> Self {
        Self {
            communities,
            posts,
            page_size: page_size.max(1),
        }
    }

    pub async fn list_communities(&self) -> Result<Vec<Community>> {
        self.communities.find_communities().await
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Community>> {
        self.communities.find_communities_by_subscriber(user_id).await
    }

    /// The community with one page of its posts, newest first.
    pub async fn get_community_page(&self, id: Uuid, page: usize) -> Result<CommunityPage> {
        let community = self.find(id).await?;

        // One extra row tells us whether another page follows
        let skip = page.saturating_mul(self.page_size);
        let mut posts = self
            .posts
            .find_posts_by_community(id, skip, self.page_size + 1)
            .await?;
        let has_more = posts.len() > self.page_size;
        posts.truncate(self.page_size);

        Ok(CommunityPage {
            community,
            posts,
            page,
            page_size: self.page_size,
            has_more,
        })
    }

    pub async fn create_community(
        &self,
        req: CreateCommunityRequest,
        admin_id: &str,
    ) -> Result<Community> {
        if let Some(msg) = req.validate() {
            return Err(AppError::InvalidRequest(msg));
        }

        let mut community = Community::new(req.name.trim(), req.description, admin_id);
        community.tags = req.tags;
        community.image_uri = req.image_uri;

        let community = self.communities.insert_community(community).await?;
        info!(id = %community.id, name = %community.name, "Community created");
        Ok(community)
    }

    /// Subscribes the user. Subscribing twice is a no-op.
    pub async fn subscribe(&self, id: Uuid, user_id: &str) -> Result<Community> {
        let community = self.communities.add_subscriber(id, user_id).await?;
        debug!(community = %id, user = %user_id, "User subscribed");
        Ok(community)
    }

    /// Unsubscribes the user. Leaving a community one is not in is a no-op.
    pub async fn leave(&self, id: Uuid, user_id: &str) -> Result<Community> {
        let community = self.communities.remove_subscriber(id, user_id).await?;
        debug!(community = %id, user = %user_id, "User left community");
        Ok(community)
    }

    async fn find(&self, id: Uuid) -> Result<Community> {
        self.communities
            .find_community(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("community {}", id)))
    }
}

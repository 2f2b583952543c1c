//! Post record and reactions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    Announcement,
    General,
}

/// User-supplied body of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostData {
    pub content: String,
    #[serde(rename = "imageURI", default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    #[serde(rename = "videoURI", default, skip_serializing_if = "Option::is_none")]
    pub video_uri: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
}

/// A post. `likes`/`dislikes` always mirror the lengths of `liked_by`/`disliked_by`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub data: PostData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_id: Option<Uuid>,
    pub user_id: String,
    pub likes: usize,
    pub dislikes: usize,
    pub liked_by: Vec<String>,
    pub disliked_by: Vec<String>,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        data: PostData,
        community_id: Option<Uuid>,
        user_id: impl Into<String>,
        post_type: PostType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            data,
            community_id,
            user_id: user_id.into(),
            likes: 0,
            dislikes: 0,
            liked_by: Vec::new(),
            disliked_by: Vec::new(),
            post_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Toggles a reaction for `user_id`.
    ///
    /// Reacting removes any opposite reaction; repeating a reaction withdraws it.
    pub fn react(&mut self, user_id: &str, reaction: Reaction) {
        let (same, opposite) = match reaction {
            Reaction::Like => (&mut self.liked_by, &mut self.disliked_by),
            Reaction::Dislike => (&mut self.disliked_by, &mut self.liked_by),
        };

        opposite.retain(|id| id != user_id);
        if same.iter().any(|id| id == user_id) {
            same.retain(|id| id != user_id);
        } else {
            same.push(user_id.to_string());
        }

        self.likes = self.liked_by.len();
        self.dislikes = self.disliked_by.len();
        self.updated_at = Utc::now();
    }
}

//! Request DTOs for the community service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::post::PostData;

/// Request body for POST /tag/create
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTagRequest {
    pub tag: String,
}

/// Request body for POST /community/create
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommunityRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "imageURI", default)]
    pub image_uri: Option<String>,
}

impl CreateCommunityRequest {
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Community name cannot be empty".to_string());
        }
        None
    }
}

/// Request body for POST /post/create
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub data: PostData,
    #[serde(default)]
    pub community_id: Option<Uuid>,
}

/// Request body for POST /post/announcement
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub data: PostData,
}

/// Rejects posts without any text content.
pub fn validate_post_data(data: &PostData) -> Option<String> {
    if data.content.trim().is_empty() {
        return Some("Post content cannot be empty".to_string());
    }
    None
}

/// Query string for GET /community/:id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: usize,
}

/// Request body for POST /dev/email
#[derive(Debug, Clone, Deserialize)]
pub struct SendEmailRequest {
    pub email: String,
    pub otp: String,
    pub otp_expiry: DateTime<Utc>,
}

impl SendEmailRequest {
    pub fn validate(&self) -> Option<String> {
        if !self.email.contains('@') {
            return Some("A valid email address is required".to_string());
        }
        if self.otp.trim().is_empty() {
            return Some("OTP cannot be empty".to_string());
        }
        None
    }
}

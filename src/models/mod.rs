//! Domain records and API DTOs
//!
//! Records (`Tag`, `Community`, `Post`) are what the document store holds;
//! `requests`/`responses` are the HTTP body shapes.

pub mod community;
pub mod post;
pub mod requests;
pub mod responses;
pub mod tag;

// Re-export commonly used types
pub use community::Community;
pub use post::{Post, PostData, PostType, Reaction};
pub use requests::{
    CreateAnnouncementRequest, CreateCommunityRequest, CreatePostRequest, CreateTagRequest,
    PageQuery, SendEmailRequest,
};
pub use responses::{CommunityPage, EmailStatus, HealthResponse, StatsResponse};
pub use tag::{validate_tag_text, Tag};

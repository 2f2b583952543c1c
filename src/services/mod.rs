//! Application services
//!
//! Business rules sitting between the HTTP handlers and the stores.

pub mod community;
pub mod email;
pub mod post;
pub mod tag;

pub use community::CommunityService;
pub use email::EmailService;
pub use post::PostService;
pub use tag::TagService;

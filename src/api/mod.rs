//! API Module
//!
//! HTTP handlers and routing for the community service REST API.
//!
//! # Endpoints
//! - `GET /health` - Health check
//! - `/community/...` - Communities and subscriptions
//! - `/post/...` - Posts, announcements and reactions
//! - `/tag/...` - Tags, served through the tag cache
//! - `/dev/...` - Reset password email and cache statistics

pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::{AppState, Backends};
pub use routes::create_router;

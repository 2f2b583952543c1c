//! API Handlers
//!
//! HTTP request handlers, grouped by resource, and the state they share.

pub mod community;
pub mod dev;
pub mod post;
pub mod tag;

use std::sync::Arc;

use axum::{extract::FromRef, Json};

use crate::auth::TokenVerifier;
use crate::cache::{CacheClient, MemoryCache};
use crate::config::Config;
use crate::error::Result;
use crate::mail::{LogMailer, Mailer};
use crate::models::HealthResponse;
use crate::repositories::TagRepository;
use crate::services::{CommunityService, EmailService, PostService, TagService};
use crate::store::{CommunityStore, MemoryDocumentStore, PostStore, TagStore};

pub use community::*;
pub use dev::*;
pub use post::*;
pub use tag::*;

/// External collaborators the services are wired onto.
#[derive(Clone)]
pub struct Backends {
    pub tags: Arc<dyn TagStore>,
    pub communities: Arc<dyn CommunityStore>,
    pub posts: Arc<dyn PostStore>,
    pub cache: Arc<dyn CacheClient>,
    pub mailer: Arc<dyn Mailer>,
}

impl Backends {
    /// Everything in process: memory store, memory cache, logging mailer.
    pub fn in_memory(config: &Config) -> Self {
        let store = Arc::new(MemoryDocumentStore::new());
        Self {
            tags: store.clone(),
            communities: store.clone(),
            posts: store,
            cache: Arc::new(MemoryCache::new(
                config.cache_max_entries,
                config.cache_default_ttl,
            )),
            mailer: Arc::new(LogMailer::new()),
        }
    }
}

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub tags: Arc<TagService>,
    pub communities: Arc<CommunityService>,
    pub posts: Arc<PostService>,
    pub email: Arc<EmailService>,
    pub tokens: Arc<TokenVerifier>,
    pub cache: Arc<dyn CacheClient>,
}

impl AppState {
    /// Builds every service on top of `backends`.
    ///
    /// Fails when the token settings in `config` are unusable.
    pub fn new(config: &Config, backends: Backends) -> Result<Self> {
        let tokens = TokenVerifier::new(&config.jwt_secret, &config.jwt_algorithm)?;
        let tag_repository = TagRepository::new(backends.tags, backends.cache.clone());

        Ok(Self {
            tags: Arc::new(TagService::new(Arc::new(tag_repository))),
            communities: Arc::new(CommunityService::new(
                backends.communities.clone(),
                backends.posts.clone(),
                config.page_size,
            )),
            posts: Arc::new(PostService::new(backends.posts, backends.communities)),
            email: Arc::new(EmailService::new(
                backends.mailer,
                config.email_sender.clone(),
            )),
            tokens: Arc::new(tokens),
            cache: backends.cache,
        })
    }

    /// In-process state built from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config, Backends::in_memory(config))
    }
}

impl FromRef<AppState> for Arc<TokenVerifier> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

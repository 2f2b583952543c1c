//! Community Service
//!
//! REST backend for communities, posts and tags, with a cached tag snapshot
//! reconciled against the document store, and password-reset emails.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod mail;
pub mod models;
pub mod repositories;
pub mod services;
pub mod store;
pub mod tasks;

pub use api::{AppState, Backends};
pub use config::Config;
pub use error::{AppError, Result};
pub use tasks::{spawn_cleanup_task, spawn_tag_cache_reconciliation};

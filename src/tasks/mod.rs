//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Tag cache reconciliation: rebuilds the tag snapshot from the store
//! - TTL Cleanup: removes expired keys from the in-process cache

mod cleanup;
mod reconcile;

pub use cleanup::spawn_cleanup_task;
pub use reconcile::spawn_tag_cache_reconciliation;

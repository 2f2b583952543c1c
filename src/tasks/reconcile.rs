//! Tag Cache Reconciliation Task
//!
//! Periodically rebuilds the tag snapshot from the document store, undoing
//! any drift left by lost or failed cache appends.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::services::TagService;

/// Spawns the reconciliation loop.
///
/// The first rebuild runs immediately, which also warms the cache at startup;
/// later ones follow every `interval_secs`. Failures are logged and the loop
/// carries on.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_tag_cache_reconciliation(
    tags: Arc<TagService>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let period = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting tag cache reconciliation with interval of {} seconds",
            interval_secs
        );

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            if let Err(e) = tags.reinitialize_cache().await {
                error!(error = %e, "Tag cache reconciliation failed");
            }
        }
    })
}

//! Community Service - REST backend for communities, posts and tags
//!
//! Serves the HTTP API with a tag cache, in-process or on Redis, that is kept
//! in line with the document store by a periodic rebuild.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use community_service::api::create_router;
use community_service::cache::{CacheClient, MemoryCache, RedisCache};
use community_service::mail::{HttpMailer, LogMailer, Mailer};
use community_service::store::MemoryDocumentStore;
use community_service::{
    spawn_cleanup_task, spawn_tag_cache_reconciliation, AppState, Backends, Config,
};

/// Main entry point for the community service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Wire the store, cache and mailer into the application state
/// 4. Start the tag cache reconciliation task, plus the TTL sweep for the in-process cache
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "community_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting community service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_max_entries={}, tag_refresh={}s, page_size={}",
        config.server_port,
        config.cache_max_entries,
        config.tag_cache_refresh_interval,
        config.page_size
    );
    if config.uses_dev_secret() {
        warn!("JWT_SECRET is not set, falling back to the development secret");
    }

    let mut handles: Vec<JoinHandle<()>> = Vec::new();
    let cache: Arc<dyn CacheClient> = match &config.redis_url {
        Some(url) => {
            info!("Using Redis tag cache");
            let cache = RedisCache::connect(url, config.cache_default_ttl)
                .await
                .context("failed to connect to Redis")?;
            Arc::new(cache)
        }
        None => {
            info!("REDIS_URL is not set, using the in-process tag cache");
            let cache = MemoryCache::new(config.cache_max_entries, config.cache_default_ttl);
            handles.push(spawn_cleanup_task(cache.clone(), config.cache_cleanup_interval));
            Arc::new(cache)
        }
    };

    let mailer: Arc<dyn Mailer> = match &config.mail_api_url {
        Some(url) => {
            info!("Delivering mail through {}", url);
            Arc::new(HttpMailer::new(url.clone(), config.mail_api_key.clone()))
        }
        None => {
            warn!("MAIL_API_URL is not set, outgoing mail will only be logged");
            Arc::new(LogMailer::new())
        }
    };

    let store = Arc::new(MemoryDocumentStore::new());
    let backends = Backends {
        tags: store.clone(),
        communities: store.clone(),
        posts: store,
        cache,
        mailer,
    };
    let state = AppState::new(&config, backends).context("failed to build application state")?;

    handles.push(spawn_tag_cache_reconciliation(
        state.tags.clone(),
        config.tag_cache_refresh_interval,
    ));
    info!("Background tasks started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(handles))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then aborts the background tasks.
async fn shutdown_signal(handles: Vec<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    for handle in handles {
        handle.abort();
    }
    warn!("Background tasks aborted");
}

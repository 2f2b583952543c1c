//! API Routes
//!
//! Configures the Axum router with all community service endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats, create_announcement, create_community, create_post, create_tag, dislike_post,
    get_all_communities, get_all_communities_for_user, get_all_tags, get_announcements,
    get_community_paginated, get_post, health_handler, leave_community, like_post, send_email,
    subscribe_to_community, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .merge(community_routes())
        .merge(post_routes())
        .merge(tag_routes())
        .merge(dev_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/community", get(get_all_communities))
        .route("/community/", get(get_all_communities))
        .route("/community/my", get(get_all_communities_for_user))
        .route("/community/create", post(create_community))
        .route("/community/:community_id", get(get_community_paginated))
        .route(
            "/community/:community_id/subscribe",
            post(subscribe_to_community),
        )
        .route("/community/:community_id/leave", delete(leave_community))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/post/create", post(create_post))
        .route("/post/announcement", post(create_announcement))
        .route("/post/announcements", get(get_announcements))
        .route("/post/:post_id", get(get_post))
        .route("/post/:post_id/like", post(like_post))
        .route("/post/:post_id/dislike", post(dislike_post))
}

fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/tag", get(get_all_tags))
        .route("/tag/", get(get_all_tags))
        .route("/tag/create", post(create_tag))
}

fn dev_routes() -> Router<AppState> {
    Router::new()
        .route("/dev/email", post(send_email))
        .route("/dev/cache/stats", get(cache_stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_support::{test_state, token};
    use crate::auth::Role;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(test_state())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_community_requires_token() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/community/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_community_list_with_token() {
        for uri in ["/community", "/community/"] {
            let response = create_test_app()
                .oneshot(
                    Request::builder()
                        .uri(uri)
                        .header("authorization", format!("Bearer {}", token("u1", Role::User)))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "for {}", uri);
        }
    }

    #[tokio::test]
    async fn test_create_community_requires_admin() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/community/create")
                    .header("authorization", format!("Token {}", token("u1", Role::User)))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Rust"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_cache_stats_endpoint() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/dev/cache/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

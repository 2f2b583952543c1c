//! Post handlers

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use super::AppState;
use crate::api::extract::{AppJson, AppPath};
use crate::auth::{AdminUser, CurrentUser};
use crate::error::Result;
use crate::models::{CreateAnnouncementRequest, CreatePostRequest, Post, Reaction};

/// Handler for POST /post/create
pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    AppJson(req): AppJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>)> {
    let post = state.posts.create_post(req, &claims.user_id).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Handler for POST /post/announcement
pub async fn create_announcement(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    AppJson(req): AppJson<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<Post>)> {
    let post = state
        .posts
        .create_announcement(req, &claims.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Handler for GET /post/announcements
pub async fn get_announcements(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<Post>>> {
    Ok(Json(state.posts.list_announcements().await?))
}

/// Handler for GET /post/:post_id
pub async fn get_post(
    State(state): State<AppState>,
    _user: CurrentUser,
    AppPath(post_id): AppPath<Uuid>,
) -> Result<Json<Post>> {
    Ok(Json(state.posts.get_post(post_id).await?))
}

/// Handler for POST /post/:post_id/like
pub async fn like_post(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    AppPath(post_id): AppPath<Uuid>,
) -> Result<Json<Post>> {
    let post = state
        .posts
        .react(post_id, &claims.user_id, Reaction::Like)
        .await?;
    Ok(Json(post))
}

/// Handler for POST /post/:post_id/dislike
pub async fn dislike_post(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    AppPath(post_id): AppPath<Uuid>,
) -> Result<Json<Post>> {
    let post = state
        .posts
        .react(post_id, &claims.user_id, Reaction::Dislike)
        .await?;
    Ok(Json(post))
}

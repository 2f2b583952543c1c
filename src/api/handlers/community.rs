//! Community handlers

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use super::AppState;
use crate::api::extract::{AppJson, AppPath, AppQuery};
use crate::auth::{AdminUser, CurrentUser};
use crate::error::Result;
use crate::models::{Community, CommunityPage, CreateCommunityRequest, PageQuery};

/// Handler for GET /community/
pub async fn get_all_communities(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<Community>>> {
    Ok(Json(state.communities.list_communities().await?))
}

/// Handler for GET /community/my
pub async fn get_all_communities_for_user(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
) -> Result<Json<Vec<Community>>> {
    Ok(Json(state.communities.list_for_user(&claims.user_id).await?))
}

/// Handler for GET /community/:community_id?page=N
pub async fn get_community_paginated(
    State(state): State<AppState>,
    _user: CurrentUser,
    AppPath(community_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<CommunityPage>> {
    let page = state
        .communities
        .get_community_page(community_id, query.page)
        .await?;
    Ok(Json(page))
}

/// Handler for POST /community/create
pub async fn create_community(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    AppJson(req): AppJson<CreateCommunityRequest>,
) -> Result<(StatusCode, Json<Community>)> {
    let community = state
        .communities
        .create_community(req, &claims.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(community)))
}

/// Handler for POST /community/:community_id/subscribe
pub async fn subscribe_to_community(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    AppPath(community_id): AppPath<Uuid>,
) -> Result<Json<Community>> {
    let community = state
        .communities
        .subscribe(community_id, &claims.user_id)
        .await?;
    Ok(Json(community))
}

/// Handler for DELETE /community/:community_id/leave
pub async fn leave_community(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    AppPath(community_id): AppPath<Uuid>,
) -> Result<Json<Community>> {
    let community = state
        .communities
        .leave(community_id, &claims.user_id)
        .await?;
    Ok(Json(community))
}

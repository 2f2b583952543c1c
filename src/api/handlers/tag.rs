//! Tag handlers

use axum::{extract::State, http::StatusCode, Json};

use super::AppState;
use crate::api::extract::AppJson;
use crate::auth::CurrentUser;
use crate::error::Result;
use crate::models::{CreateTagRequest, Tag};

/// Handler for GET /tag/
pub async fn get_all_tags(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<Tag>>> {
    Ok(Json(state.tags.get_all_tags().await?))
}

/// Handler for POST /tag/create
pub async fn create_tag(
    State(state): State<AppState>,
    _user: CurrentUser,
    AppJson(req): AppJson<CreateTagRequest>,
) -> Result<(StatusCode, Json<Tag>)> {
    let tag = state.tags.create_tag(&req.tag).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

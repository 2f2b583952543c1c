//! Request extractors guarding authenticated routes

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use tracing::debug;

use super::token::{token_from_header, Claims, TokenVerifier, MISSING_TOKEN_MESSAGE};
use crate::error::AppError;

/// Caller holding a valid token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

/// Caller holding a valid token with the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    Arc<TokenVerifier>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verifier = Arc::<TokenVerifier>::from_ref(state);
        let claims = verifier
            .check_token(token_from_header(&parts.headers), true)?
            .ok_or_else(|| AppError::Unauthorized(MISSING_TOKEN_MESSAGE.to_string()))?;

        debug!(user = %claims.user_id, "User authenticated");
        Ok(CurrentUser(claims))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    Arc<TokenVerifier>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(claims) = CurrentUser::from_request_parts(parts, state).await?;
        if !claims.is_admin() {
            return Err(AppError::Forbidden("admin role required".to_string()));
        }
        Ok(AdminUser(claims))
    }
}

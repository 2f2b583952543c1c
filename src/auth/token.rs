//! Bearer token verification

use std::str::FromStr;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{AppError, Result};

/// Message returned when an authenticated route is called without a token.
pub const MISSING_TOKEN_MESSAGE: &str =
    "This is an authenticated resource, you must be logged in to access it.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Decoded token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "_id", alias = "sub")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Verifies tokens signed with a shared secret and a fixed HMAC algorithm.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Builds a verifier for `algorithm` (`HS256`, `HS384` or `HS512`).
    pub fn new(secret: &str, algorithm: &str) -> Result<Self> {
        let algorithm = Algorithm::from_str(algorithm).map_err(|_| {
            AppError::Internal(format!("unknown signing algorithm '{}'", algorithm))
        })?;
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(AppError::Internal(format!(
                "{:?} needs a key pair; only shared-secret algorithms are supported",
                algorithm
            )));
        }

        Ok(Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(algorithm),
        })
    }

    /// Verifies a token.
    ///
    /// A missing token is an error only when `required`; otherwise it yields
    /// `Ok(None)`.
    pub fn check_token(&self, token: Option<&str>, required: bool) -> Result<Option<Claims>> {
        let Some(token) = token else {
            return if required {
                Err(AppError::Unauthorized(MISSING_TOKEN_MESSAGE.to_string()))
            } else {
                Ok(None)
            };
        };

        match jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation) {
            Ok(data) => Ok(Some(data.claims)),
            Err(e) => {
                error!(error = %e, "Error in verifying token");
                match e.kind() {
                    ErrorKind::ExpiredSignature => Err(AppError::TokenExpired),
                    _ => Err(AppError::InvalidToken(e.to_string())),
                }
            }
        }
    }
}

/// Extracts the token from `Authorization: Bearer <t>` or `Authorization: Token <t>`.
pub fn token_from_header(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("Bearer" | "Token"), Some(token)) => Some(token),
        _ => None,
    }
}

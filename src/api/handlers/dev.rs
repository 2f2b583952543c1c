//! Developer handlers

use axum::{extract::State, Json};
use tracing::debug;

use super::AppState;
use crate::api::extract::AppJson;
use crate::error::{AppError, Result};
use crate::models::{EmailStatus, SendEmailRequest, StatsResponse};

/// Handler for POST /dev/email
///
/// Always answers 200 once the body is valid; delivery failures are reported
/// inside the returned [`EmailStatus`].
pub async fn send_email(
    State(state): State<AppState>,
    AppJson(req): AppJson<SendEmailRequest>,
) -> Result<Json<EmailStatus>> {
    debug!("Calling send email endpoint");
    if let Some(msg) = req.validate() {
        return Err(AppError::InvalidRequest(msg));
    }

    let status = state
        .email
        .send_reset_password_email(&req.email, &req.otp, req.otp_expiry)
        .await;
    Ok(Json(status))
}

/// Handler for GET /dev/cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = state
        .cache
        .stats()
        .await
        .ok_or_else(|| AppError::NotFound("cache backend exposes no statistics".to_string()))?;
    Ok(Json(StatsResponse::from(stats)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_support::test_state;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_send_email_reports_delivery() {
        let state = test_state();

        let req = SendEmailRequest {
            email: "user@x.io".to_string(),
            otp: "123456".to_string(),
            otp_expiry: Utc::now() + Duration::minutes(15),
        };
        let Json(status) = send_email(State(state), AppJson(req)).await.unwrap();

        assert_eq!(status.delivered, 1);
    }

    #[tokio::test]
    async fn test_send_email_rejects_bad_address() {
        let state = test_state();

        let req = SendEmailRequest {
            email: "nope".to_string(),
            otp: "123456".to_string(),
            otp_expiry: Utc::now(),
        };
        let result = send_email(State(state), AppJson(req)).await;

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_cache_stats() {
        let state = test_state();

        let Json(stats) = cache_stats(State(state)).await.unwrap();

        assert_eq!(stats.hits, 0);
        assert_eq!(stats.total_entries, 0);
    }
}

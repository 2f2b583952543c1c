//! Response DTOs for the community service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use super::{Community, Post};
use crate::cache::CacheStats;

/// Response body for GET /community/:id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPage {
    pub community: Community,
    pub posts: Vec<Post>,
    pub page: usize,
    pub page_size: usize,
    pub has_more: bool,
}

/// Outcome of a mail delivery attempt.
///
/// Failures are reported through this value rather than as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailStatus {
    pub delivered: u8,
    pub message_id: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EmailStatus {
    pub fn success(message_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            delivered: 1,
            message_id: Some(message_id.into()),
            status: status.into(),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            delivered: 0,
            message_id: None,
            status: "error".to_string(),
            error: Some(error.into()),
        }
    }
}

/// Response body for GET /dev/cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub cas_conflicts: u64,
    pub total_entries: usize,
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            cas_conflicts: stats.cas_conflicts,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_status_error_shape() {
        let json = serde_json::to_value(EmailStatus::error("smtp down")).unwrap();

        assert_eq!(json["delivered"], 0);
        assert_eq!(json["status"], "error");
        assert!(json["messageId"].is_null());
        assert_eq!(json["error"], "smtp down");
    }

    #[test]
    fn test_email_status_success_shape() {
        let json = serde_json::to_value(EmailStatus::success("m-1", "queued")).unwrap();

        assert_eq!(json["delivered"], 1);
        assert_eq!(json["messageId"], "m-1");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 8,
            misses: 2,
            ..CacheStats::default()
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert!(json.contains("OK"));
        assert!(json.contains("timestamp"));
    }
}

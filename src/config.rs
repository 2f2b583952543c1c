//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Fallback signing secret, only suitable for local development.
pub const DEV_JWT_SECRET: &str = "change-me";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Shared secret used to verify bearer tokens
    pub jwt_secret: String,
    /// Signing algorithm name, e.g. `HS256`
    pub jwt_algorithm: String,
    /// Redis server for the shared cache; the in-process cache is used when unset
    pub redis_url: Option<String>,
    /// Maximum number of keys the in-process cache holds
    pub cache_max_entries: usize,
    /// Default TTL in seconds for cache keys, None = keys never expire
    pub cache_default_ttl: Option<u64>,
    /// Interval in seconds between cache TTL sweeps
    pub cache_cleanup_interval: u64,
    /// Interval in seconds between full tag cache rebuilds
    pub tag_cache_refresh_interval: u64,
    /// Posts per page when listing a community
    pub page_size: usize,
    /// Sender address for outgoing mail
    pub email_sender: String,
    /// Mail API endpoint; outgoing mail is only logged when unset
    pub mail_api_url: Option<String>,
    /// Bearer key for the mail API
    pub mail_api_key: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `JWT_SECRET` - Token signing secret (default: `change-me`)
    /// - `JWT_ALGORITHM` - Token signing algorithm (default: HS256)
    /// - `REDIS_URL` - Shared cache server (default: unset, in-process cache)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache keys (default: 1000)
    /// - `CACHE_DEFAULT_TTL` - Cache key TTL in seconds (default: none)
    /// - `CACHE_CLEANUP_INTERVAL` - TTL sweep frequency in seconds (default: 60)
    /// - `TAG_CACHE_REFRESH_INTERVAL` - Tag cache rebuild frequency in seconds (default: 3600)
    /// - `PAGE_SIZE` - Posts per community page (default: 10)
    /// - `EMAIL_SENDER` - Sender address (default: no-reply@placy.app)
    /// - `MAIL_API_URL` / `MAIL_API_KEY` - Mail API endpoint and key (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            jwt_secret: non_empty_var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_algorithm: non_empty_var("JWT_ALGORITHM").unwrap_or(defaults.jwt_algorithm),
            redis_url: non_empty_var("REDIS_URL"),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.cache_max_entries),
            cache_default_ttl: parse_var("CACHE_DEFAULT_TTL").or(defaults.cache_default_ttl),
            cache_cleanup_interval: parse_var("CACHE_CLEANUP_INTERVAL")
                .unwrap_or(defaults.cache_cleanup_interval),
            tag_cache_refresh_interval: parse_var("TAG_CACHE_REFRESH_INTERVAL")
                .unwrap_or(defaults.tag_cache_refresh_interval),
            page_size: parse_var("PAGE_SIZE")
                .filter(|size: &usize| *size > 0)
                .unwrap_or(defaults.page_size),
            email_sender: non_empty_var("EMAIL_SENDER").unwrap_or(defaults.email_sender),
            mail_api_url: non_empty_var("MAIL_API_URL"),
            mail_api_key: non_empty_var("MAIL_API_KEY"),
        }
    }

    /// Returns true when the signing secret is still the development fallback.
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            jwt_algorithm: "HS256".to_string(),
            redis_url: None,
            cache_max_entries: 1000,
            cache_default_ttl: None,
            cache_cleanup_interval: 60,
            tag_cache_refresh_interval: 3600,
            page_size: 10,
            email_sender: "no-reply@placy.app".to_string(),
            mail_api_url: None,
            mail_api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.jwt_algorithm, "HS256");
        assert_eq!(config.cache_max_entries, 1000);
        assert!(config.redis_url.is_none());
        assert!(config.cache_default_ttl.is_none());
        assert_eq!(config.tag_cache_refresh_interval, 3600);
        assert_eq!(config.page_size, 10);
        assert!(config.mail_api_url.is_none());
        assert!(config.uses_dev_secret());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        for name in [
            "SERVER_PORT",
            "JWT_SECRET",
            "JWT_ALGORITHM",
            "REDIS_URL",
            "CACHE_MAX_ENTRIES",
            "CACHE_DEFAULT_TTL",
            "CACHE_CLEANUP_INTERVAL",
            "TAG_CACHE_REFRESH_INTERVAL",
            "PAGE_SIZE",
            "EMAIL_SENDER",
            "MAIL_API_URL",
            "MAIL_API_KEY",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);
        assert!(config.redis_url.is_none());
        assert_eq!(config.cache_cleanup_interval, 60);
        assert_eq!(config.tag_cache_refresh_interval, 3600);
        assert_eq!(config.email_sender, "no-reply@placy.app");
    }
}

//! Redis Cache Module
//!
//! [`CacheClient`] over a Redis server, shared by every service instance.
//!
//! Each key is a hash with `value` and `version` fields. Versions come from a
//! single counter key so they are never reused, even after a key expires.
//! Writes run as Lua scripts: a compare-and-set has to read and write in one
//! step, and `WATCH` is not usable over the multiplexed connection.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{Client, Script};
use tracing::info;

use crate::cache::{CacheClient, Versioned};
use crate::error::Result;

/// Counter key every version stamp is drawn from.
pub const VERSION_COUNTER_KEY: &str = "cache:version";

const SET_SCRIPT: &str = r"
local version = redis.call('INCR', KEYS[2])
redis.call('HSET', KEYS[1], 'value', ARGV[1], 'version', version)
if tonumber(ARGV[2]) > 0 then
    redis.call('EXPIRE', KEYS[1], ARGV[2])
else
    redis.call('PERSIST', KEYS[1])
end
return version
";

const COMPARE_AND_SET_SCRIPT: &str = r"
if redis.call('HGET', KEYS[1], 'version') ~= ARGV[1] then
    return 0
end
local version = redis.call('INCR', KEYS[2])
redis.call('HSET', KEYS[1], 'value', ARGV[2], 'version', version)
if tonumber(ARGV[3]) > 0 then
    redis.call('EXPIRE', KEYS[1], ARGV[3])
else
    redis.call('PERSIST', KEYS[1])
end
return 1
";

#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    /// TTL in seconds applied on every write; 0 keeps keys forever
    ttl_seconds: u64,
    set_script: Script,
    cas_script: Script,
}

impl RedisCache {
    /// Opens a managed connection to `redis_url`.
    ///
    /// Keys written through this client expire after `default_ttl` seconds
    /// when given.
    pub async fn connect(redis_url: &str, default_ttl: Option<u64>) -> Result<Self> {
        let client = Client::open(redis_url)?;
        let conn = client.get_connection_manager().await?;
        info!("Connected to Redis cache");

        Ok(Self {
            conn,
            ttl_seconds: default_ttl.unwrap_or(0),
            set_script: Script::new(SET_SCRIPT),
            cas_script: Script::new(COMPARE_AND_SET_SCRIPT),
        })
    }
}

#[async_trait]
impl CacheClient for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Versioned>> {
        let mut conn = self.conn.clone();
        let (value, version): (Option<String>, Option<u64>) = redis::cmd("HMGET")
            .arg(key)
            .arg("value")
            .arg("version")
            .query_async(&mut conn)
            .await?;

        Ok(value
            .zip(version)
            .map(|(value, version)| Versioned { value, version }))
    }

    async fn set(&self, key: &str, value: String) -> Result<u64> {
        let mut conn = self.conn.clone();
        let version: u64 = self
            .set_script
            .key(key)
            .key(VERSION_COUNTER_KEY)
            .arg(value)
            .arg(self.ttl_seconds)
            .invoke_async(&mut conn)
            .await?;
        Ok(version)
    }

    async fn compare_and_set(
        &self,
        key: &str,
        expected_version: u64,
        value: String,
    ) -> Result<bool> {
        let mut conn = self.conn.clone();
        let written: i64 = self
            .cas_script
            .key(key)
            .key(VERSION_COUNTER_KEY)
            .arg(expected_version.to_string())
            .arg(value)
            .arg(self.ttl_seconds)
            .invoke_async(&mut conn)
            .await?;
        Ok(written == 1)
    }
}

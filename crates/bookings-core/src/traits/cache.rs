//! Key/value cache behind visitor sessions.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// A string cache with per-key expiry.
///
/// Session values are the only tenant: each is one JSON document under
/// its own key, written with the session lifetime. Serialization happens
/// in the session layer, so backends only move strings.
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug + 'static {
    /// The value under `key`, or `None` once it expired or was removed.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key` for `ttl`, replacing any earlier value
    /// and its expiry.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Drop `key`. Missing keys are not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Whether `key` currently holds a value.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Round-trip to the backend; `false` or an error means degraded.
    async fn health_check(&self) -> AppResult<bool>;
}

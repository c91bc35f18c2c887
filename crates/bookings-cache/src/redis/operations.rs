//! Session values in Redis.
//!
//! Every write carries a millisecond expiry (`SET .. PX`), so a session
//! value never outlives the lifetime it was written with.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;

use bookings_core::error::{AppError, ErrorKind};
use bookings_core::result::AppResult;
use bookings_core::traits::cache::CacheProvider;

use super::client::RedisClient;

/// Cache provider over a shared Redis connection.
#[derive(Debug, Clone)]
pub struct RedisCacheProvider {
    client: RedisClient,
}

impl RedisCacheProvider {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Run one command against the prefixed `key`.
    async fn run<T: redis::FromRedisValue + Send>(
        &self,
        command: &str,
        key: &str,
        build: impl FnOnce(&mut redis::Cmd) + Send,
    ) -> AppResult<T> {
        let mut cmd = redis::cmd(command);
        cmd.arg(self.client.prefixed_key(key));
        build(&mut cmd);

        let mut conn: ConnectionManager = self.client.conn_mut();
        cmd.query_async(&mut conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Cache, format!("Redis {command} failed"), e))
    }
}

/// Expiry in milliseconds; Redis rejects a zero `PX`.
fn expiry_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.run("GET", key, |_| {}).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let millis = expiry_millis(ttl);
        self.run("SET", key, |cmd| {
            cmd.arg(value).arg("PX").arg(millis);
        })
        .await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let _removed: u64 = self.run("DEL", key, |_| {}).await?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let count: u64 = self.run("EXISTS", key, |_| {}).await?;
        Ok(count > 0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Cache, "Redis PING failed", e))?;
        Ok(pong == "PONG")
    }
}

//! Session-scoped key/value storage on top of the cache.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use bookings_cache::CacheManager;
use bookings_cache::keys;
use bookings_core::config::SessionConfig;
use bookings_core::result::AppResult;
use bookings_core::traits::cache::CacheProvider;

use crate::token;

/// Hands out [`SessionHandle`]s bound to a token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: CacheManager,
    lifetime: Duration,
}

impl SessionStore {
    /// Create a session store writing through `cache`.
    pub fn new(cache: CacheManager, config: &SessionConfig) -> Self {
        Self {
            cache,
            lifetime: config.lifetime(),
        }
    }

    /// A fresh random session token.
    pub fn new_token(&self) -> String {
        token::generate()
    }

    /// Handle for the session identified by `token`.
    pub fn handle(&self, token: impl Into<String>) -> SessionHandle {
        SessionHandle {
            token: token.into(),
            cache: self.cache.clone(),
            lifetime: self.lifetime,
        }
    }

    /// How long session values live.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

/// Typed access to the values of one session.
///
/// Every write refreshes the value's lifetime.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    token: String,
    cache: CacheManager,
    lifetime: Duration,
}

impl SessionHandle {
    /// The session token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Read a value.
    ///
    /// A stored value that no longer deserializes as `T` counts as absent.
    pub async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.cache.get(&keys::session_value(&self.token, key)).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Discarding unreadable session value");
                Ok(None)
            }
        }
    }

    /// Write a value, replacing any previous one.
    pub async fn put<T: Serialize + Sync>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.cache
            .set(&keys::session_value(&self.token, key), &json, self.lifetime)
            .await?;
        debug!(key, "Stored session value");
        Ok(())
    }

    /// Read a value and remove it.
    pub async fn pop<T: DeserializeOwned + Send>(&self, key: &str) -> AppResult<Option<T>> {
        let value = self.get(key).await?;
        self.remove(key).await?;
        Ok(value)
    }

    /// Remove a value.
    pub async fn remove(&self, key: &str) -> AppResult<()> {
        self.cache
            .delete(&keys::session_value(&self.token, key))
            .await
    }

    /// Whether a value is present.
    pub async fn exists(&self, key: &str) -> AppResult<bool> {
        self.cache
            .exists(&keys::session_value(&self.token, key))
            .await
    }
}

//! Visitor session configuration.

use serde::{Deserialize, Serialize};

/// Visitor session configuration.
///
/// Sessions are anonymous: a random token in a cookie (or the
/// `X-Session` header for non-browser clients) scopes the values the
/// booking flow keeps between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Lifetime of session values in hours.
    #[serde(default = "default_lifetime")]
    pub lifetime_hours: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Header checked before the cookie.
    #[serde(default = "default_header_name")]
    pub header_name: String,
    /// Mark the cookie `Secure`. Forced on when the server runs in production.
    #[serde(default)]
    pub secure_cookie: bool,
}

impl SessionConfig {
    /// Session lifetime as a `Duration`.
    pub fn lifetime(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.lifetime_hours * 3600)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime_hours: default_lifetime(),
            cookie_name: default_cookie_name(),
            header_name: default_header_name(),
            secure_cookie: false,
        }
    }
}

fn default_lifetime() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "bookings_session".to_string()
}

fn default_header_name() -> String {
    "x-session".to_string()
}

//! Per-session anti-forgery tokens.
//!
//! Each session gets one random token the first time a page is rendered.
//! Forms echo it back in a `csrf_token` field (or scripts in the
//! `x-csrf-token` header) and state-changing requests are refused when the
//! echoed value does not match the stored one.

use tracing::debug;

use bookings_core::result::AppResult;

use crate::store::SessionHandle;
use crate::token;

/// Session key holding the token.
pub const CSRF_KEY: &str = "csrf_token";

/// Form field name carrying the token.
pub const CSRF_FIELD: &str = "csrf_token";

/// Header name carrying the token.
pub const CSRF_HEADER: &str = "x-csrf-token";

impl SessionHandle {
    /// The session's token, created on first use.
    pub async fn csrf_token(&self) -> AppResult<String> {
        if let Some(existing) = self.get::<String>(CSRF_KEY).await? {
            return Ok(existing);
        }
        let fresh = token::generate();
        self.put(CSRF_KEY, &fresh).await?;
        debug!("Issued anti-forgery token");
        Ok(fresh)
    }

    /// Whether `presented` matches the stored token. A session that never
    /// rendered a page has no token and accepts nothing.
    pub async fn verify_csrf(&self, presented: &str) -> AppResult<bool> {
        let Some(expected) = self.get::<String>(CSRF_KEY).await? else {
            return Ok(false);
        };
        Ok(tokens_match(expected.as_bytes(), presented.as_bytes()))
    }
}

/// Length-checked comparison that does not stop at the first differing byte.
fn tokens_match(expected: &[u8], presented: &[u8]) -> bool {
    if expected.is_empty() || expected.len() != presented.len() {
        return false;
    }
    expected
        .iter()
        .zip(presented)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

//! Cache key builders.
//!
//! The Redis provider prepends its configured prefix, so keys here are
//! unprefixed.

/// Cache key for one value stored in a visitor session.
pub fn session_value(token: &str, key: &str) -> String {
    format!("session:{token}:{key}")
}

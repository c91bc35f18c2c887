//! # bookings-session
//!
//! Visitor sessions for the booking flow. A session is an opaque random
//! token; the values scoped to it live in the cache as JSON and expire
//! after the configured lifetime. Sessions also carry the one-shot
//! flash, error and warning messages shown after a redirect, and the
//! anti-forgery token every form posts back.

pub mod csrf;
pub mod flash;
pub mod store;
pub mod token;

pub use csrf::{CSRF_FIELD, CSRF_HEADER};
pub use flash::{FlashKind, FlashMessages};
pub use store::{SessionHandle, SessionStore};

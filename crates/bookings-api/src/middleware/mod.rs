//! Axum middleware stack.

pub mod compression;
pub mod cors;
pub mod csrf;
pub mod logging;
pub mod session;

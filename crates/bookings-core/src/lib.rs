//! # bookings-core
//!
//! Core crate for the Bookings site. Contains the cache trait,
//! configuration schemas, typed identifiers, the date-range type used by
//! availability search, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Bookings crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

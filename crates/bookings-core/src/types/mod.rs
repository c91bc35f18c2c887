//! Core type definitions used across the Bookings workspace.

pub mod date_range;
pub mod id;

pub use date_range::{DATE_FORMAT, DateRange};
pub use id::*;

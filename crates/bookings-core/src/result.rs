//! Convenience result type alias for Bookings.

use crate::error::AppError;

/// A specialized `Result` type for Bookings operations.
pub type AppResult<T> = Result<T, AppError>;

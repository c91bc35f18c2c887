//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store backend in use.
    pub backend: String,
    /// Whether the store answered.
    pub database: bool,
    /// Whether the cache answered.
    pub cache: bool,
}

/// Answer of the availability JSON endpoint, consumed by client script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Whether the room is free.
    pub ok: bool,
    /// Explanation when the check itself failed.
    pub message: String,
    /// Echoed room id.
    pub room_id: String,
    /// Echoed arrival date.
    pub start_date: String,
    /// Echoed departure date.
    pub end_date: String,
}

impl AvailabilityResponse {
    /// A failed check with `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Self::default()
        }
    }
}

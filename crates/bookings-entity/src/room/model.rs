//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bookings_core::types::RoomId;

/// A bookable room. Reference data: rows are seeded by migrations and
/// never changed by the booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Display name shown to visitors.
    pub room_name: String,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Build a room value with both timestamps set to now.
    pub fn new(id: RoomId, room_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            room_name: room_name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

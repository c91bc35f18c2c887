//! Room repository implementation.

use sqlx::PgPool;

use bookings_core::error::{AppError, ErrorKind};
use bookings_core::result::AppResult;
use bookings_core::types::{DateRange, RoomId};
use bookings_entity::Room;

/// Repository for room lookups and availability queries.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by ID.
    pub async fn find_by_id(&self, id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT id, room_name, created_at, updated_at FROM rooms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// Rooms with no restriction overlapping `range`.
    pub async fn find_available(&self, range: &DateRange) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT r.id, r.room_name, r.created_at, r.updated_at FROM rooms r \
             WHERE r.id NOT IN ( \
                 SELECT rr.room_id FROM room_restrictions rr \
                 WHERE $1 < rr.end_date AND $2 > rr.start_date \
                   AND rr.start_date < rr.end_date AND $1 < $2 \
             ) ORDER BY r.id",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search room availability", e)
        })
    }
}

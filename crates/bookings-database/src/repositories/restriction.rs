//! Room restriction repository implementation.

use sqlx::{PgExecutor, PgPool};

use bookings_core::error::{AppError, ErrorKind};
use bookings_core::result::AppResult;
use bookings_core::types::{DateRange, RoomId, RoomRestrictionId};
use bookings_entity::NewRoomRestriction;

/// Repository for room restriction rows.
#[derive(Debug, Clone)]
pub struct RestrictionRepository {
    pool: PgPool,
}

impl RestrictionRepository {
    /// Create a new restriction repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a restriction through `executor` and return its id.
    pub async fn insert<'e, E>(executor: E, data: &NewRoomRestriction) -> AppResult<RoomRestrictionId>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, RoomRestrictionId>(
            "INSERT INTO room_restrictions \
             (start_date, end_date, room_id, reservation_id, restriction_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW()) RETURNING id",
        )
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.room_id)
        .bind(data.reservation_id)
        .bind(data.restriction)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert room restriction", e)
        })
    }

    /// Insert a restriction using the pool.
    pub async fn create(&self, data: &NewRoomRestriction) -> AppResult<RoomRestrictionId> {
        Self::insert(&self.pool, data).await
    }

    /// Count restrictions on `room_id` that overlap `range`.
    pub async fn count_overlapping(&self, room_id: RoomId, range: &DateRange) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(id) FROM room_restrictions \
             WHERE room_id = $1 AND $2 < end_date AND $3 > start_date \
               AND start_date < end_date AND $2 < $3",
        )
        .bind(room_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search room availability", e)
        })
    }
}

//! Reservation repository implementation.

use sqlx::{PgExecutor, PgPool};

use bookings_core::error::{AppError, ErrorKind};
use bookings_core::result::AppResult;
use bookings_core::types::ReservationId;
use bookings_entity::NewReservation;

/// Repository for reservation rows.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a reservation through `executor` and return its id.
    pub async fn insert<'e, E>(executor: E, data: &NewReservation) -> AppResult<ReservationId>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, ReservationId>(
            "INSERT INTO reservations \
             (first_name, last_name, email, phone, start_date, end_date, room_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW()) RETURNING id",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.room_id)
        .fetch_one(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert reservation", e))
    }

    /// Insert a reservation using the pool.
    pub async fn create(&self, data: &NewReservation) -> AppResult<ReservationId> {
        Self::insert(&self.pool, data).await
    }

    /// Delete a reservation; its restrictions go with it (`ON DELETE CASCADE`).
    pub async fn delete(&self, id: ReservationId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reservation", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

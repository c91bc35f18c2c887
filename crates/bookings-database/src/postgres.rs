//! PostgreSQL-backed [`BookingStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use bookings_core::error::{AppError, ErrorKind};
use bookings_core::result::AppResult;
use bookings_core::types::{DateRange, ReservationId, RoomId, RoomRestrictionId};
use bookings_entity::{NewReservation, NewRoomRestriction, Reservation, Room};

use crate::connection::DatabasePool;
use crate::repositories::{ReservationRepository, RestrictionRepository, RoomRepository};
use crate::store::BookingStore;

/// Booking store over a sqlx connection pool.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: PgPool,
    rooms: RoomRepository,
    reservations: ReservationRepository,
    restrictions: RestrictionRepository,
}

impl PgBookingStore {
    /// Build the store and its repositories over `db`.
    pub fn new(db: &DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            rooms: RoomRepository::new(pool.clone()),
            reservations: ReservationRepository::new(pool.clone()),
            restrictions: RestrictionRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert_reservation(&self, reservation: &NewReservation) -> AppResult<ReservationId> {
        self.reservations.create(reservation).await
    }

    async fn insert_room_restriction(
        &self,
        restriction: &NewRoomRestriction,
    ) -> AppResult<RoomRestrictionId> {
        self.restrictions.create(restriction).await
    }

    async fn delete_reservation(&self, id: ReservationId) -> AppResult<()> {
        self.reservations.delete(id).await.map(|_| ())
    }

    async fn search_availability_by_dates_by_room_id(
        &self,
        range: &DateRange,
        room_id: RoomId,
    ) -> AppResult<bool> {
        let overlapping = self.restrictions.count_overlapping(room_id, range).await?;
        debug!(room_id = %room_id, range = %range, overlapping, "Checked room availability");
        Ok(overlapping == 0)
    }

    async fn search_availability_for_all_rooms(&self, range: &DateRange) -> AppResult<Vec<Room>> {
        self.rooms.find_available(range).await
    }

    async fn get_room_by_id(&self, id: RoomId) -> AppResult<Room> {
        self.rooms
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    async fn commit_reservation(&self, reservation: NewReservation) -> AppResult<Reservation> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let id = ReservationRepository::insert(&mut *tx, &reservation).await?;
        let restriction = NewRoomRestriction::for_reservation(id, &reservation);
        RestrictionRepository::insert(&mut *tx, &restriction).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reservation", e)
        })?;

        info!(reservation_id = %id, room_id = %reservation.room_id, "Reservation committed");
        Ok(Reservation::from_new(id, reservation, None))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

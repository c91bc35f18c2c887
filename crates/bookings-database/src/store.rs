//! The storage contract the booking flow is written against.

use async_trait::async_trait;
use tracing::{error, info, warn};

use bookings_core::result::AppResult;
use bookings_core::types::{DateRange, ReservationId, RoomId, RoomRestrictionId};
use bookings_entity::{NewReservation, NewRoomRestriction, Reservation, Room};

/// Rooms, reservations and the restrictions that block them.
///
/// All failures surface as `ErrorKind::Database`, except an unknown room
/// in [`BookingStore::get_room_by_id`] which is `ErrorKind::NotFound`.
#[async_trait]
pub trait BookingStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a reservation and return its new id.
    async fn insert_reservation(&self, reservation: &NewReservation) -> AppResult<ReservationId>;

    /// Persist a restriction and return its new id.
    async fn insert_room_restriction(
        &self,
        restriction: &NewRoomRestriction,
    ) -> AppResult<RoomRestrictionId>;

    /// Remove a reservation together with any restriction it owns.
    async fn delete_reservation(&self, id: ReservationId) -> AppResult<()>;

    /// True when no restriction on `room_id` overlaps `range`.
    async fn search_availability_by_dates_by_room_id(
        &self,
        range: &DateRange,
        room_id: RoomId,
    ) -> AppResult<bool>;

    /// Every room with no restriction overlapping `range`, ordered by id.
    async fn search_availability_for_all_rooms(&self, range: &DateRange) -> AppResult<Vec<Room>>;

    /// Look up a single room.
    async fn get_room_by_id(&self, id: RoomId) -> AppResult<Room>;

    /// Store a reservation and the restriction that blocks its room as one unit.
    ///
    /// Implementations with transactions should override this. The default
    /// inserts both rows in sequence and deletes the reservation again when
    /// the restriction insert fails, so a failed commit leaves nothing behind.
    async fn commit_reservation(&self, reservation: NewReservation) -> AppResult<Reservation> {
        let id = self.insert_reservation(&reservation).await?;
        let restriction = NewRoomRestriction::for_reservation(id, &reservation);

        if let Err(e) = self.insert_room_restriction(&restriction).await {
            warn!(
                reservation_id = %id,
                room_id = %reservation.room_id,
                error = %e,
                "Restriction insert failed, removing reservation"
            );
            if let Err(cleanup) = self.delete_reservation(id).await {
                error!(
                    reservation_id = %id,
                    error = %cleanup,
                    "Failed to remove reservation after restriction insert failure"
                );
            }
            return Err(e);
        }

        info!(reservation_id = %id, room_id = %reservation.room_id, "Reservation committed");
        Ok(Reservation::from_new(id, reservation, None))
    }

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

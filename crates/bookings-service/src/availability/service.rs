//! Room availability queries.

use std::sync::Arc;

use tracing::{debug, info};

use bookings_core::result::AppResult;
use bookings_core::types::{DateRange, RoomId};
use bookings_database::BookingStore;
use bookings_entity::Room;

/// Answers which rooms are free for a stay.
///
/// Degenerate ranges (`start >= end`) have no availability and never
/// reach the store.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    store: Arc<dyn BookingStore>,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// Whether `room_id` has no restriction overlapping `range`.
    pub async fn check_room_availability(
        &self,
        range: &DateRange,
        room_id: RoomId,
    ) -> AppResult<bool> {
        if range.is_empty() {
            debug!(range = %range, room_id = %room_id, "Empty range has no availability");
            return Ok(false);
        }

        let available = self
            .store
            .search_availability_by_dates_by_room_id(range, room_id)
            .await?;
        debug!(range = %range, room_id = %room_id, available, "Checked room availability");
        Ok(available)
    }

    /// Every room free for the whole of `range`.
    pub async fn search_all_rooms(&self, range: &DateRange) -> AppResult<Vec<Room>> {
        if range.is_empty() {
            debug!(range = %range, "Empty range has no availability");
            return Ok(Vec::new());
        }

        let rooms = self.store.search_availability_for_all_rooms(range).await?;
        info!(range = %range, available = rooms.len(), "Searched availability");
        Ok(rooms)
    }

    /// Look up one room.
    pub async fn room(&self, room_id: RoomId) -> AppResult<Room> {
        self.store.get_room_by_id(room_id).await
    }
}

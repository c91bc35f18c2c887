//! Reservation held in session state before it is committed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bookings_core::types::{DateRange, RoomId};

use crate::room::Room;

/// The in-flight booking a visitor is assembling.
///
/// Created by an availability search (dates only), completed by choosing
/// a room, and snapshotted with the room's details before the guest form
/// is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionalReservation {
    /// Arrival date.
    pub start_date: NaiveDate,
    /// Departure date (exclusive).
    pub end_date: NaiveDate,
    /// The chosen room, once picked.
    #[serde(default)]
    pub room_id: Option<RoomId>,
    /// Snapshot of the chosen room.
    #[serde(default)]
    pub room: Option<Room>,
}

impl ProvisionalReservation {
    /// Provisional reservation for a searched range with no room picked yet.
    pub fn for_range(range: DateRange) -> Self {
        Self {
            start_date: range.start,
            end_date: range.end,
            room_id: None,
            room: None,
        }
    }

    /// Provisional reservation with the room already chosen.
    pub fn for_room(room_id: RoomId, range: DateRange) -> Self {
        Self {
            room_id: Some(room_id),
            ..Self::for_range(range)
        }
    }

    /// The requested stay.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Pick a room, discarding any snapshot of a previously chosen one.
    pub fn choose_room(&mut self, room_id: RoomId) {
        if self.room_id != Some(room_id) {
            self.room = None;
        }
        self.room_id = Some(room_id);
    }
}

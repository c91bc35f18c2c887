//! Room restriction entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bookings_core::types::{DateRange, ReservationId, RoomId, RoomRestrictionId};

use super::kind::RestrictionKind;
use crate::reservation::NewReservation;

/// A date range during which a room cannot be booked.
///
/// Any restriction overlapping a requested stay makes the room
/// unavailable for that stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RoomRestriction {
    /// Unique restriction identifier.
    pub id: RoomRestrictionId,
    /// First blocked night.
    pub start_date: NaiveDate,
    /// Day the block ends (exclusive).
    pub end_date: NaiveDate,
    /// The blocked room.
    pub room_id: RoomId,
    /// The reservation that caused the block, if any.
    pub reservation_id: Option<ReservationId>,
    /// Why the room is blocked.
    #[sqlx(rename = "restriction_id")]
    pub restriction: RestrictionKind,
    /// When the restriction was created.
    pub created_at: DateTime<Utc>,
    /// When the restriction was last updated.
    pub updated_at: DateTime<Utc>,
}

impl RoomRestriction {
    /// The blocked range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Whether this restriction blocks `room_id` for any night of `range`.
    pub fn blocks(&self, room_id: RoomId, range: &DateRange) -> bool {
        self.room_id == room_id && self.range().overlaps(range)
    }
}

/// Data required to create a new room restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoomRestriction {
    /// First blocked night.
    pub start_date: NaiveDate,
    /// Day the block ends (exclusive).
    pub end_date: NaiveDate,
    /// The blocked room.
    pub room_id: RoomId,
    /// The owning reservation.
    pub reservation_id: Option<ReservationId>,
    /// Why the room is blocked.
    pub restriction: RestrictionKind,
}

impl NewRoomRestriction {
    /// The restriction that must accompany a freshly inserted reservation.
    pub fn for_reservation(reservation_id: ReservationId, reservation: &NewReservation) -> Self {
        Self {
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            room_id: reservation.room_id,
            reservation_id: Some(reservation_id),
            restriction: RestrictionKind::Reservation,
        }
    }

    /// An owner block not tied to any reservation.
    pub fn owner_block(room_id: RoomId, range: DateRange) -> Self {
        Self {
            start_date: range.start,
            end_date: range.end,
            room_id,
            reservation_id: None,
            restriction: RestrictionKind::OwnerBlock,
        }
    }
}

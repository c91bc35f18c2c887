//! Reservation entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bookings_core::types::{DateRange, ReservationId, RoomId};

use super::guest::GuestDetails;
use super::provisional::ProvisionalReservation;
use crate::room::Room;

/// A committed reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: ReservationId,
    /// Guest given name.
    pub first_name: String,
    /// Guest family name.
    pub last_name: String,
    /// Guest email.
    pub email: String,
    /// Guest phone.
    pub phone: String,
    /// Arrival date.
    pub start_date: NaiveDate,
    /// Departure date (exclusive).
    pub end_date: NaiveDate,
    /// The reserved room.
    pub room_id: RoomId,
    /// Snapshot of the room taken when the booking flow looked it up.
    #[sqlx(skip)]
    pub room: Option<Room>,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Build the committed form of `new` once the store has assigned `id`.
    pub fn from_new(id: ReservationId, new: NewReservation, room: Option<Room>) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            start_date: new.start_date,
            end_date: new.end_date,
            room_id: new.room_id,
            room,
            created_at: now,
            updated_at: now,
        }
    }

    /// The reserved stay.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Data required to insert a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    /// Guest given name.
    pub first_name: String,
    /// Guest family name.
    pub last_name: String,
    /// Guest email.
    pub email: String,
    /// Guest phone.
    pub phone: String,
    /// Arrival date.
    pub start_date: NaiveDate,
    /// Departure date (exclusive).
    pub end_date: NaiveDate,
    /// The room to reserve.
    pub room_id: RoomId,
}

impl NewReservation {
    /// Combine validated guest details with the room and dates held in session.
    pub fn new(guest: GuestDetails, room_id: RoomId, range: DateRange) -> Self {
        Self {
            first_name: guest.first_name,
            last_name: guest.last_name,
            email: guest.email,
            phone: guest.phone,
            start_date: range.start,
            end_date: range.end,
            room_id,
        }
    }

    /// Shortcut for a provisional reservation whose room is already chosen.
    pub fn from_provisional(guest: GuestDetails, provisional: &ProvisionalReservation) -> Option<Self> {
        provisional
            .room_id
            .map(|room_id| Self::new(guest, room_id, provisional.range()))
    }

    /// The requested stay.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

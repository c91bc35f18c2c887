//! Form and query payloads.
//!
//! Every field is a required string: a missing field is a rejection,
//! a malformed value is reported by the handler that parses it.

use serde::{Deserialize, Serialize};

use bookings_entity::GuestDetails;

/// `POST /search-availability`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchForm {
    /// Arrival date, `YYYY-MM-DD`.
    pub start: String,
    /// Departure date, `YYYY-MM-DD`.
    pub end: String,
}

/// `POST /search-availability-json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityJsonForm {
    /// Arrival date, `YYYY-MM-DD`.
    pub start: String,
    /// Departure date, `YYYY-MM-DD`.
    pub end: String,
    /// Room to check.
    pub room_id: String,
}

/// `GET /book-room`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRoomQuery {
    /// Room id.
    pub id: String,
    /// Arrival date.
    pub s: String,
    /// Departure date.
    pub e: String,
}

/// `POST /make-reservation`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl From<ReservationForm> for GuestDetails {
    fn from(form: ReservationForm) -> Self {
        GuestDetails::new(form.first_name, form.last_name, form.email, form.phone)
    }
}

//! Results of workflow steps, for the rendering boundary to present.

use bookings_core::error::AppError;
use bookings_core::types::DateRange;
use bookings_entity::{GuestDetails, ProvisionalReservation, Reservation, Room};

use super::state::BookingState;
use super::validation::FieldErrors;

/// Result of an availability search.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Rooms free for the whole range; the range is now held in session.
    Available {
        /// The searched range.
        range: DateRange,
        /// Free rooms, ordered by id.
        rooms: Vec<Room>,
    },
    /// Nothing is free; the visitor stays on the search page.
    NoAvailability,
}

/// Result of submitting guest details.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    /// Stored; the visitor moves on to the summary.
    Confirmed(Reservation),
    /// Some fields are invalid; show the form again.
    NeedsCorrection {
        /// What the visitor entered.
        form: GuestDetails,
        /// The held room and dates.
        reservation: ProvisionalReservation,
        /// Messages per offending field.
        errors: FieldErrors,
    },
    /// The session was lost or the store failed; the visitor starts over.
    Failed(AppError),
}

impl BookingOutcome {
    /// State the visitor is in afterwards.
    pub fn state(&self) -> BookingState {
        match self {
            BookingOutcome::Confirmed(_) => BookingState::Confirmed,
            BookingOutcome::NeedsCorrection { .. } => BookingState::AwaitingDetails,
            BookingOutcome::Failed(_) => BookingState::Failed,
        }
    }
}

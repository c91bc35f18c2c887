//! Booking flow states.

use std::fmt;

use serde::{Deserialize, Serialize};

use bookings_core::error::AppError;
use bookings_entity::ProvisionalReservation;

/// Where a visitor's booking stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingState {
    /// No room chosen yet.
    Searching,
    /// A room and dates are held; guest details are needed.
    AwaitingDetails,
    /// Guest details are being checked.
    Validating,
    /// The reservation is being written.
    Committing,
    /// The reservation is stored.
    Confirmed,
    /// The attempt was abandoned; the visitor starts over.
    Failed,
}

impl BookingState {
    /// The state implied by what the session currently holds.
    pub fn of(provisional: Option<&ProvisionalReservation>) -> Self {
        match provisional {
            Some(p) if p.room_id.is_some() => BookingState::AwaitingDetails,
            _ => BookingState::Searching,
        }
    }

    /// Whether moving from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: BookingState) -> bool {
        use BookingState::*;
        matches!(
            (self, next),
            (Searching, Searching)
                | (Searching, AwaitingDetails)
                | (AwaitingDetails, Searching)
                | (AwaitingDetails, AwaitingDetails)
                | (AwaitingDetails, Validating)
                | (Validating, AwaitingDetails)
                | (Validating, Committing)
                | (Validating, Failed)
                | (Committing, Confirmed)
                | (Committing, Failed)
                | (Confirmed, Searching)
                | (Failed, Searching)
        )
    }

    /// Move to `next`, rejecting transitions the flow does not allow.
    pub fn advance(self, next: BookingState) -> Result<BookingState, AppError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(AppError::internal(format!(
                "Illegal booking transition {self} -> {next}"
            )))
        }
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingState::Searching => "searching",
            BookingState::AwaitingDetails => "awaiting_details",
            BookingState::Validating => "validating",
            BookingState::Committing => "committing",
            BookingState::Confirmed => "confirmed",
            BookingState::Failed => "failed",
        };
        f.write_str(name)
    }
}

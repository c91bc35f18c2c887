//! Reservation workflow: search, choose a room, enter guest details, commit.

pub mod outcome;
pub mod state;
pub mod validation;
pub mod workflow;

pub use outcome::{BookingOutcome, SearchOutcome};
pub use state::BookingState;
pub use validation::FieldErrors;
pub use workflow::ReservationWorkflow;

/// Session key of the reservation being assembled.
pub const RESERVATION_KEY: &str = "reservation";

/// Session key of the reservation awaiting its summary page.
pub const CONFIRMED_KEY: &str = "reservation_confirmed";

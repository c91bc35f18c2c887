//! # bookings-service
//!
//! Use cases of the booking site: the availability engine and the
//! reservation workflow that carries a booking from search to
//! confirmation through session state.
//!
//! Services receive their store at construction time and the visitor's
//! session through a [`RequestContext`] on every call.

pub mod availability;
pub mod context;
pub mod reservation;

pub use availability::AvailabilityService;
pub use context::RequestContext;
pub use reservation::{
    BookingOutcome, BookingState, FieldErrors, ReservationWorkflow, SearchOutcome,
};

//! Reservation domain entities.

pub mod guest;
pub mod model;
pub mod provisional;

pub use guest::GuestDetails;
pub use model::{NewReservation, Reservation};
pub use provisional::ProvisionalReservation;

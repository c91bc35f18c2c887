//! # bookings-entity
//!
//! Domain entity models for the Bookings site. Every struct in this crate
//! represents a database table row, an insert payload, or a value object
//! carried in session state. Database entities derive `sqlx::FromRow`.

pub mod reservation;
pub mod restriction;
pub mod room;

pub use reservation::{GuestDetails, NewReservation, ProvisionalReservation, Reservation};
pub use restriction::{NewRoomRestriction, RestrictionKind, RoomRestriction};
pub use room::Room;

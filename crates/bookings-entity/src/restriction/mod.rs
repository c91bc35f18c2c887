//! Room restriction domain entities.

pub mod kind;
pub mod model;

pub use kind::RestrictionKind;
pub use model::{NewRoomRestriction, RoomRestriction};

//! # bookings-database
//!
//! Persistence for rooms, reservations and room restrictions.
//!
//! The [`BookingStore`] trait is the only thing the service layer sees. Two
//! implementations are selected at startup: [`PgBookingStore`] over a sqlx
//! PostgreSQL pool, and [`MemoryBookingStore`], an in-process fixture used by
//! tests and the `memory` backend.

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::{FaultPlan, MemoryBookingStore};
pub use postgres::PgBookingStore;
pub use store::BookingStore;

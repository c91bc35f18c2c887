//! PostgreSQL repositories, one per table.
//!
//! Insert helpers take any `PgExecutor` so the same statements run against
//! the pool or inside a transaction.

pub mod reservation;
pub mod restriction;
pub mod room;

pub use reservation::ReservationRepository;
pub use restriction::RestrictionRepository;
pub use room::RoomRepository;

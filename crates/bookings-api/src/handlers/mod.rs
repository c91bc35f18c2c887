//! Route handlers.

pub mod availability;
pub mod health;
pub mod pages;
pub mod reservation;

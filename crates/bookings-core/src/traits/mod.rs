//! Core traits defined in `bookings-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;

//! # bookings-api
//!
//! HTTP layer for the booking site built on Axum.
//!
//! Pages are rendered as JSON view models (see [`view::PageView`]); the
//! booking flow answers with redirects the way a server-rendered site
//! would, carrying messages across them in the visitor's session.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod view;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;

//! Route definitions for the booking site.
//!
//! Site pages and the booking flow are mounted at the root; the health
//! check lives under `/api`.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route, threading `AppState` through.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(availability_routes())
        .merge(reservation_routes())
        .nest("/api", health_routes())
        .with_state(state)
}

/// Informational pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home).post(handlers::pages::home))
        .route("/about", get(handlers::pages::about))
        .route("/contact", get(handlers::pages::contact))
        .route("/generals-quarters", get(handlers::pages::generals_quarters))
        .route("/majors-suite", get(handlers::pages::majors_suite))
}

/// Availability search, page and JSON
fn availability_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/search-availability",
            get(handlers::pages::search_availability)
                .post(handlers::availability::post_search_availability),
        )
        .route(
            "/search-availability-json",
            post(handlers::availability::post_availability_json),
        )
}

/// Booking flow
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/choose-room/{id}", get(handlers::reservation::choose_room))
        .route("/book-room", get(handlers::reservation::book_room))
        .route(
            "/make-reservation",
            get(handlers::reservation::make_reservation)
                .post(handlers::reservation::post_make_reservation),
        )
        .route(
            "/reservation-summary",
            get(handlers::reservation::reservation_summary),
        )
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

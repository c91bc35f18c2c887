//! Static site pages.

use axum::extract::State;
use axum::response::Response;
use serde_json::json;
use tracing::warn;

use bookings_core::types::RoomId;

use crate::extractors::Visitor;
use crate::state::AppState;
use crate::view::render;

/// GET / (and POST /, where a 307 restart lands)
pub async fn home(visitor: Visitor) -> Response {
    render(&visitor, "home.page", json!({})).await
}

/// GET /about
pub async fn about(visitor: Visitor) -> Response {
    render(&visitor, "about.page", json!({})).await
}

/// GET /contact
pub async fn contact(visitor: Visitor) -> Response {
    render(&visitor, "contact.page", json!({})).await
}

/// GET /generals-quarters
pub async fn generals_quarters(State(state): State<AppState>, visitor: Visitor) -> Response {
    room_page(&state, &visitor, "generals.page", RoomId(1)).await
}

/// GET /majors-suite
pub async fn majors_suite(State(state): State<AppState>, visitor: Visitor) -> Response {
    room_page(&state, &visitor, "majors.page", RoomId(2)).await
}

/// GET /search-availability
pub async fn search_availability(visitor: Visitor) -> Response {
    render(&visitor, "search-availability.page", json!({})).await
}

async fn room_page(state: &AppState, visitor: &Visitor, page: &str, room_id: RoomId) -> Response {
    // The page still renders without the room record.
    let room = match state.availability.room(room_id).await {
        Ok(room) => Some(room),
        Err(e) => {
            warn!(request_id = %visitor.request_id, room_id = %room_id, error = %e, "Room lookup failed");
            None
        }
    };
    render(visitor, page, json!({ "room_id": room_id, "room": room })).await
}

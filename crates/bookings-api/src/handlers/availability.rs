//! Availability search handlers.

use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::Response;
use axum::{Form, Json};
use serde_json::json;
use tracing::warn;

use bookings_core::types::{DATE_FORMAT, DateRange, RoomId};
use bookings_service::SearchOutcome;

use crate::dto::request::{AvailabilityJsonForm, SearchForm};
use crate::dto::response::AvailabilityResponse;
use crate::extractors::Visitor;
use crate::state::AppState;
use crate::view::{render, restart, restart_with_error, see_other};

/// POST /search-availability
pub async fn post_search_availability(
    State(state): State<AppState>,
    visitor: Visitor,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Response {
    let Ok(Form(form)) = form else {
        return restart_with_error(&visitor, "Can't parse form").await;
    };

    let range = match DateRange::parse(&form.start, &form.end) {
        Ok(range) => range,
        Err(e) => return restart_with_error(&visitor, &e.message).await,
    };

    match state.workflow.search(&visitor, range).await {
        Ok(SearchOutcome::Available { range, rooms }) => {
            render(
                &visitor,
                "choose-room.page",
                json!({
                    "rooms": rooms,
                    "start_date": range.start.format(DATE_FORMAT).to_string(),
                    "end_date": range.end.format(DATE_FORMAT).to_string(),
                }),
            )
            .await
        }
        Ok(SearchOutcome::NoAvailability) => see_other("/search-availability"),
        Err(_) => restart(),
    }
}

/// POST /search-availability-json
pub async fn post_availability_json(
    State(state): State<AppState>,
    visitor: Visitor,
    form: Result<Form<AvailabilityJsonForm>, FormRejection>,
) -> Json<AvailabilityResponse> {
    let Ok(Form(form)) = form else {
        return Json(AvailabilityResponse::error("Internal server error"));
    };

    let (range, room_id) = match (
        DateRange::parse(&form.start, &form.end),
        form.room_id.parse::<RoomId>(),
    ) {
        (Ok(range), Ok(room_id)) => (range, room_id),
        _ => return Json(AvailabilityResponse::error("Internal server error")),
    };

    match state.availability.check_room_availability(&range, room_id).await {
        Ok(available) => Json(AvailabilityResponse {
            ok: available,
            message: String::new(),
            room_id: room_id.to_string(),
            start_date: form.start.trim().to_string(),
            end_date: form.end.trim().to_string(),
        }),
        Err(e) => {
            warn!(request_id = %visitor.request_id, error = %e, "Availability check failed");
            Json(AvailabilityResponse::error("Error querying database"))
        }
    }
}

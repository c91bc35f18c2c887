//! Booking flow handlers.

use axum::Form;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde_json::json;

use bookings_core::types::{DATE_FORMAT, DateRange, RoomId};
use bookings_entity::{GuestDetails, ProvisionalReservation};
use bookings_service::{BookingOutcome, FieldErrors};

use crate::dto::request::{BookRoomQuery, ReservationForm};
use crate::extractors::Visitor;
use crate::state::AppState;
use crate::view::{render, restart, restart_with_error, see_other};

/// GET /choose-room/{id}
pub async fn choose_room(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(id): Path<String>,
) -> Response {
    let Ok(room_id) = id.parse::<RoomId>() else {
        return restart_with_error(&visitor, "Missing url parameter").await;
    };

    match state.workflow.choose_room(&visitor, room_id).await {
        Ok(_) => see_other("/make-reservation"),
        Err(_) => restart(),
    }
}

/// GET /book-room?id=&s=&e=
pub async fn book_room(
    State(state): State<AppState>,
    visitor: Visitor,
    query: Result<Query<BookRoomQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return restart_with_error(&visitor, "Missing url parameter").await;
    };
    let Ok(room_id) = query.id.parse::<RoomId>() else {
        return restart_with_error(&visitor, "Missing url parameter").await;
    };
    let range = match DateRange::parse(&query.s, &query.e) {
        Ok(range) => range,
        Err(e) => return restart_with_error(&visitor, &e.message).await,
    };

    match state.workflow.book_room(&visitor, room_id, range).await {
        Ok(_) => see_other("/make-reservation"),
        Err(_) => restart(),
    }
}

/// GET /make-reservation
pub async fn make_reservation(State(state): State<AppState>, visitor: Visitor) -> Response {
    match state.workflow.begin_details(&visitor).await {
        Ok(reservation) => {
            reservation_form(&visitor, &reservation, &GuestDetails::default(), &FieldErrors::new())
                .await
        }
        Err(_) => restart(),
    }
}

/// POST /make-reservation
pub async fn post_make_reservation(
    State(state): State<AppState>,
    visitor: Visitor,
    form: Result<Form<ReservationForm>, FormRejection>,
) -> Response {
    let Ok(Form(form)) = form else {
        return restart_with_error(&visitor, "Can't parse form").await;
    };

    match state.workflow.submit_details(&visitor, form.into()).await {
        BookingOutcome::Confirmed(_) => see_other("/reservation-summary"),
        BookingOutcome::NeedsCorrection {
            form,
            reservation,
            errors,
        } => reservation_form(&visitor, &reservation, &form, &errors).await,
        BookingOutcome::Failed(_) => restart(),
    }
}

/// GET /reservation-summary
pub async fn reservation_summary(State(state): State<AppState>, visitor: Visitor) -> Response {
    match state.workflow.confirmation(&visitor).await {
        Ok(reservation) => {
            render(
                &visitor,
                "reservation-summary.page",
                json!({
                    "start_date": reservation.start_date.format(DATE_FORMAT).to_string(),
                    "end_date": reservation.end_date.format(DATE_FORMAT).to_string(),
                    "reservation": reservation,
                }),
            )
            .await
        }
        Err(_) => restart(),
    }
}

async fn reservation_form(
    visitor: &Visitor,
    reservation: &ProvisionalReservation,
    form: &GuestDetails,
    errors: &FieldErrors,
) -> Response {
    render(
        visitor,
        "make-reservation.page",
        json!({
            "reservation": reservation,
            "start_date": reservation.start_date.format(DATE_FORMAT).to_string(),
            "end_date": reservation.end_date.format(DATE_FORMAT).to_string(),
            "form": form,
            "errors": errors,
        }),
    )
    .await
}

//! The booking flow, from availability search to confirmation.
//!
//! Each step reads and writes the visitor's session through the
//! [`RequestContext`]. Steps that fail leave a message on the session's
//! error channel before returning, so the page the visitor is redirected
//! to can explain what happened.

use std::sync::Arc;

use tracing::{debug, info, warn};

use bookings_core::error::AppError;
use bookings_core::result::AppResult;
use bookings_core::types::{DateRange, RoomId};
use bookings_database::BookingStore;
use bookings_entity::{GuestDetails, NewReservation, ProvisionalReservation, Reservation, Room};
use bookings_session::FlashKind;

use super::outcome::{BookingOutcome, SearchOutcome};
use super::state::BookingState;
use super::validation::validate_guest;
use super::{CONFIRMED_KEY, RESERVATION_KEY};
use crate::availability::AvailabilityService;
use crate::context::RequestContext;

/// Drives a visitor's booking through its states.
#[derive(Debug, Clone)]
pub struct ReservationWorkflow {
    store: Arc<dyn BookingStore>,
    availability: AvailabilityService,
}

impl ReservationWorkflow {
    /// Creates a new reservation workflow.
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self {
            availability: AvailabilityService::new(store.clone()),
            store,
        }
    }

    /// Search all rooms for `range` and hold the dates in session.
    ///
    /// A new search drops whatever reservation the session was holding,
    /// whether or not it finds anything.
    pub async fn search(&self, ctx: &RequestContext, range: DateRange) -> AppResult<SearchOutcome> {
        ctx.session.remove(RESERVATION_KEY).await?;

        if let Err(e) = range.ensure_valid() {
            return Err(self.fail(ctx, e.message.clone(), e).await);
        }

        let rooms = match self.availability.search_all_rooms(&range).await {
            Ok(rooms) => rooms,
            Err(e) => {
                return Err(self
                    .fail(ctx, "Can't get availability for rooms", e)
                    .await);
            }
        };

        if rooms.is_empty() {
            info!(request_id = %ctx.request_id, range = %range, "No availability");
            self.notify(ctx, FlashKind::Error, "No availability").await;
            return Ok(SearchOutcome::NoAvailability);
        }

        ctx.session
            .put(RESERVATION_KEY, &ProvisionalReservation::for_range(range))
            .await?;
        Ok(SearchOutcome::Available { range, rooms })
    }

    /// Pick one of the rooms offered by the last search.
    pub async fn choose_room(
        &self,
        ctx: &RequestContext,
        room_id: RoomId,
    ) -> AppResult<ProvisionalReservation> {
        let mut provisional = self.provisional(ctx).await?;
        let state = BookingState::of(Some(&provisional)).advance(BookingState::AwaitingDetails)?;

        provisional.choose_room(room_id);
        ctx.session.put(RESERVATION_KEY, &provisional).await?;
        debug!(request_id = %ctx.request_id, room_id = %room_id, state = %state, "Room chosen");
        Ok(provisional)
    }

    /// Start a booking for a specific room, as linked from a room's page.
    pub async fn book_room(
        &self,
        ctx: &RequestContext,
        room_id: RoomId,
        range: DateRange,
    ) -> AppResult<ProvisionalReservation> {
        if let Err(e) = range.ensure_valid() {
            return Err(self.fail(ctx, e.message.clone(), e).await);
        }

        let room = match self.store.get_room_by_id(room_id).await {
            Ok(room) => room,
            Err(e) => return Err(self.fail(ctx, "Can't get room from database", e).await),
        };

        let mut provisional = ProvisionalReservation::for_room(room_id, range);
        provisional.room = Some(room);
        ctx.session.put(RESERVATION_KEY, &provisional).await?;
        debug!(request_id = %ctx.request_id, room_id = %room_id, range = %range, "Room booked from link");
        Ok(provisional)
    }

    /// Load the held reservation for the guest form, with the room's details.
    pub async fn begin_details(&self, ctx: &RequestContext) -> AppResult<ProvisionalReservation> {
        let mut provisional = self.provisional(ctx).await?;

        let Some(room_id) = provisional.room_id else {
            let e = AppError::session("No room selected");
            return Err(self.fail(ctx, "Please choose a room first", e).await);
        };

        let room = match self.store.get_room_by_id(room_id).await {
            Ok(room) => room,
            Err(e) => return Err(self.fail(ctx, "Can't find room", e).await),
        };

        provisional.room = Some(room);
        ctx.session.put(RESERVATION_KEY, &provisional).await?;
        Ok(provisional)
    }

    /// Validate guest details and commit the held reservation.
    pub async fn submit_details(&self, ctx: &RequestContext, guest: GuestDetails) -> BookingOutcome {
        let provisional = match self.provisional(ctx).await {
            Ok(p) => p,
            Err(e) => return BookingOutcome::Failed(e),
        };

        let state = match BookingState::of(Some(&provisional)).advance(BookingState::Validating) {
            Ok(state) => state,
            Err(_) => {
                let e = AppError::session("No room selected");
                return BookingOutcome::Failed(
                    self.fail(ctx, "Please choose a room first", e).await,
                );
            }
        };

        if let Err(errors) = validate_guest(&guest) {
            debug!(
                request_id = %ctx.request_id,
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Guest details need correction"
            );
            return BookingOutcome::NeedsCorrection {
                form: guest,
                reservation: provisional,
                errors,
            };
        }

        let Some(new) = NewReservation::from_provisional(guest, &provisional) else {
            return BookingOutcome::Failed(AppError::session("No room selected"));
        };

        let state = match state.advance(BookingState::Committing) {
            Ok(s) => s,
            Err(e) => return BookingOutcome::Failed(e),
        };
        debug!(request_id = %ctx.request_id, state = %state, room_id = %new.room_id, "Committing reservation");

        let mut reservation = match self.store.commit_reservation(new).await {
            Ok(reservation) => reservation,
            Err(e) => {
                return BookingOutcome::Failed(
                    self.fail(ctx, "Can't save the reservation", e).await,
                );
            }
        };
        reservation.room = match provisional.room {
            Some(room) => Some(room),
            None => self.room_for_summary(ctx, reservation.room_id).await,
        };

        if let Err(e) = self.confirm(ctx, &reservation).await {
            warn!(
                request_id = %ctx.request_id,
                reservation_id = %reservation.id,
                error = %e,
                "Reservation stored but session update failed"
            );
        }

        info!(
            request_id = %ctx.request_id,
            reservation_id = %reservation.id,
            room_id = %reservation.room_id,
            range = %reservation.range(),
            "Reservation confirmed"
        );
        BookingOutcome::Confirmed(reservation)
    }

    /// Take the confirmed reservation for its summary page. Shown once.
    pub async fn confirmation(&self, ctx: &RequestContext) -> AppResult<Reservation> {
        match ctx.session.pop::<Reservation>(CONFIRMED_KEY).await? {
            Some(reservation) => Ok(reservation),
            None => {
                let e = AppError::session("No confirmed reservation in session");
                Err(self.fail(ctx, "Can't get reservation from session", e).await)
            }
        }
    }

    /// Room details for a reservation committed without visiting the
    /// details form. The booking already stands, so a failed lookup only
    /// leaves the summary without a room name.
    async fn room_for_summary(&self, ctx: &RequestContext, room_id: RoomId) -> Option<Room> {
        match self.store.get_room_by_id(room_id).await {
            Ok(room) => Some(room),
            Err(e) => {
                warn!(request_id = %ctx.request_id, room_id = %room_id, error = %e, "Room lookup for summary failed");
                None
            }
        }
    }

    async fn provisional(&self, ctx: &RequestContext) -> AppResult<ProvisionalReservation> {
        match ctx.session.get::<ProvisionalReservation>(RESERVATION_KEY).await {
            Ok(Some(provisional)) => Ok(provisional),
            Ok(None) => {
                let e = AppError::session("No reservation in session");
                Err(self.fail(ctx, "Can't get reservation from session", e).await)
            }
            Err(e) => Err(self.fail(ctx, "Can't get reservation from session", e).await),
        }
    }

    async fn confirm(&self, ctx: &RequestContext, reservation: &Reservation) -> AppResult<()> {
        ctx.session.remove(RESERVATION_KEY).await?;
        ctx.session.put(CONFIRMED_KEY, reservation).await?;
        ctx.session
            .flash(FlashKind::Flash, "Reservation confirmed")
            .await
    }

    /// Record `message` on the error channel and hand back `err`.
    async fn fail(
        &self,
        ctx: &RequestContext,
        message: impl Into<String>,
        err: AppError,
    ) -> AppError {
        let message = message.into();
        if err.is_recoverable() {
            info!(request_id = %ctx.request_id, error = %err, "Booking step rejected");
        } else {
            warn!(request_id = %ctx.request_id, error = %err, "Booking step failed");
        }
        self.notify(ctx, FlashKind::Error, message).await;
        err
    }

    async fn notify(&self, ctx: &RequestContext, kind: FlashKind, message: impl Into<String>) {
        if let Err(e) = ctx.session.flash(kind, message).await {
            warn!(request_id = %ctx.request_id, error = %e, "Failed to write flash message");
        }
    }
}

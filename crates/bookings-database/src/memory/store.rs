//! [`BookingStore`] backed by concurrent hash maps.
//!
//! Behaves like the PostgreSQL store (real overlap checks, cascade on
//! delete) except that reservation inserts do not check the room exists.
//! A [`FaultPlan`] scripts failures for exercising error paths.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use bookings_core::error::AppError;
use bookings_core::result::AppResult;
use bookings_core::types::{DateRange, ReservationId, RoomId, RoomRestrictionId};
use bookings_entity::{NewReservation, NewRoomRestriction, Reservation, Room, RoomRestriction};

use super::fault::FaultPlan;
use crate::store::BookingStore;

/// In-memory booking store.
#[derive(Debug, Clone)]
pub struct MemoryBookingStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    rooms: DashMap<RoomId, Room>,
    reservations: DashMap<ReservationId, Reservation>,
    restrictions: DashMap<RoomRestrictionId, RoomRestriction>,
    next_reservation_id: AtomicI32,
    next_restriction_id: AtomicI32,
    faults: FaultPlan,
}

impl MemoryBookingStore {
    /// Empty store with the given failure script.
    pub fn new(faults: FaultPlan) -> Self {
        Self {
            inner: Arc::new(Inner {
                rooms: DashMap::new(),
                reservations: DashMap::new(),
                restrictions: DashMap::new(),
                next_reservation_id: AtomicI32::new(1),
                next_restriction_id: AtomicI32::new(1),
                faults,
            }),
        }
    }

    /// Store seeded with the two site rooms and no failures.
    pub fn seeded() -> Self {
        Self::new(FaultPlan::none()).with_site_rooms()
    }

    /// Store seeded with the two site rooms and [`FaultPlan::fixture`].
    pub fn fixture() -> Self {
        Self::new(FaultPlan::fixture()).with_site_rooms()
    }

    /// Add a room (replacing one with the same id).
    pub fn with_room(self, room: Room) -> Self {
        self.inner.rooms.insert(room.id, room);
        self
    }

    fn with_site_rooms(self) -> Self {
        self.with_room(Room::new(RoomId(1), "General's Quarters"))
            .with_room(Room::new(RoomId(2), "Major's Suite"))
    }

    /// Number of stored reservations.
    pub fn reservation_count(&self) -> usize {
        self.inner.reservations.len()
    }

    /// Number of stored restrictions.
    pub fn restriction_count(&self) -> usize {
        self.inner.restrictions.len()
    }

    /// A stored reservation by id.
    pub fn reservation(&self, id: ReservationId) -> Option<Reservation> {
        self.inner.reservations.get(&id).map(|r| r.value().clone())
    }

    fn is_blocked(&self, room_id: RoomId, range: &DateRange) -> bool {
        self.inner
            .restrictions
            .iter()
            .any(|r| r.value().blocks(room_id, range))
    }

    fn check_search_fault(&self) -> AppResult<()> {
        if self.inner.faults.searches {
            return Err(AppError::database("Availability query failed"));
        }
        Ok(())
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert_reservation(&self, reservation: &NewReservation) -> AppResult<ReservationId> {
        if self.inner.faults.reservation_insert.contains(&reservation.room_id) {
            return Err(AppError::database(format!(
                "Failed to insert reservation for room {}",
                reservation.room_id
            )));
        }

        let id = ReservationId(self.inner.next_reservation_id.fetch_add(1, Ordering::SeqCst));
        self.inner
            .reservations
            .insert(id, Reservation::from_new(id, reservation.clone(), None));
        debug!(reservation_id = %id, "Stored reservation");
        Ok(id)
    }

    async fn insert_room_restriction(
        &self,
        restriction: &NewRoomRestriction,
    ) -> AppResult<RoomRestrictionId> {
        if self.inner.faults.restriction_insert.contains(&restriction.room_id) {
            return Err(AppError::database(format!(
                "Failed to insert room restriction for room {}",
                restriction.room_id
            )));
        }

        let id = RoomRestrictionId(self.inner.next_restriction_id.fetch_add(1, Ordering::SeqCst));
        let now = Utc::now();
        self.inner.restrictions.insert(
            id,
            RoomRestriction {
                id,
                start_date: restriction.start_date,
                end_date: restriction.end_date,
                room_id: restriction.room_id,
                reservation_id: restriction.reservation_id,
                restriction: restriction.restriction,
                created_at: now,
                updated_at: now,
            },
        );
        debug!(restriction_id = %id, "Stored room restriction");
        Ok(id)
    }

    async fn delete_reservation(&self, id: ReservationId) -> AppResult<()> {
        self.inner.reservations.remove(&id);
        self.inner
            .restrictions
            .retain(|_, r| r.reservation_id != Some(id));
        Ok(())
    }

    async fn search_availability_by_dates_by_room_id(
        &self,
        range: &DateRange,
        room_id: RoomId,
    ) -> AppResult<bool> {
        self.check_search_fault()?;
        Ok(!self.is_blocked(room_id, range))
    }

    async fn search_availability_for_all_rooms(&self, range: &DateRange) -> AppResult<Vec<Room>> {
        self.check_search_fault()?;
        let mut rooms: Vec<Room> = self
            .inner
            .rooms
            .iter()
            .filter(|r| !self.is_blocked(*r.key(), range))
            .map(|r| r.value().clone())
            .collect();
        rooms.sort_by_key(|r| r.id);
        Ok(rooms)
    }

    async fn get_room_by_id(&self, id: RoomId) -> AppResult<Room> {
        self.inner
            .rooms
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

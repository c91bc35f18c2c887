//! Scripted failures for the in-memory store.

use std::collections::HashSet;

use bookings_core::types::RoomId;

/// Which operations the in-memory store should fail, and for which rooms.
#[derive(Debug, Clone, Default)]
pub struct FaultPlan {
    /// Rooms whose reservation inserts fail.
    pub reservation_insert: HashSet<RoomId>,
    /// Rooms whose restriction inserts fail.
    pub restriction_insert: HashSet<RoomId>,
    /// Fail every availability query.
    pub searches: bool,
}

impl FaultPlan {
    /// No failures.
    pub fn none() -> Self {
        Self::default()
    }

    /// The failures the booking fixture is known for: reservation inserts
    /// for room 2 and restriction inserts for room 1000 fail.
    pub fn fixture() -> Self {
        Self {
            reservation_insert: HashSet::from([RoomId(2)]),
            restriction_insert: HashSet::from([RoomId(1000)]),
            searches: false,
        }
    }

    /// Also fail reservation inserts for `room_id`.
    pub fn fail_reservation_insert(mut self, room_id: RoomId) -> Self {
        self.reservation_insert.insert(room_id);
        self
    }

    /// Also fail restriction inserts for `room_id`.
    pub fn fail_restriction_insert(mut self, room_id: RoomId) -> Self {
        self.restriction_insert.insert(room_id);
        self
    }

    /// Fail every availability query.
    pub fn fail_searches(mut self) -> Self {
        self.searches = true;
        self
    }
}

//! Restriction kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a room is blocked for a date range.
///
/// Stored as the `restriction_id` foreign key into the seeded
/// `restrictions` lookup table, hence the explicit discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKind {
    /// Blocked by a guest reservation.
    Reservation = 1,
    /// Blocked by the owner (maintenance, private use).
    OwnerBlock = 2,
}

impl RestrictionKind {
    /// Lookup-table name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            RestrictionKind::Reservation => "Reservation",
            RestrictionKind::OwnerBlock => "Owner Block",
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

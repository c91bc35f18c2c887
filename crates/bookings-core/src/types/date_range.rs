//! Half-open date ranges used by availability search and bookings.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Date format accepted from forms and shown back to visitors (`2050-01-31`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stay from `start` (arrival) up to but excluding `end` (departure).
///
/// Construction does not reject `start >= end`: callers decide whether an
/// empty range is a validation error (booking input) or simply matches
/// nothing (availability queries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// Arrival date (inclusive).
    pub start: NaiveDate,
    /// Departure date (exclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range from two dates.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse a range from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        Ok(Self {
            start: parse_date("start", start)?,
            end: parse_date("end", end)?,
        })
    }

    /// True when the range contains no night at all (`start >= end`).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Reject empty or inverted ranges.
    pub fn ensure_valid(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::validation(format!(
                "Departure ({}) must be after arrival ({})",
                self.end.format(DATE_FORMAT),
                self.start.format(DATE_FORMAT)
            )));
        }
        Ok(())
    }

    /// Whether two ranges share at least one night.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && self.end > other.start
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::with_source(
            ErrorKind::Validation,
            format!("Invalid {field} date '{value}'"),
            e,
        )
    })
}

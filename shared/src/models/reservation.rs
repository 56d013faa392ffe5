//! Reservation Model

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Half-open seating window `[start, end)` on a single day's floor.
///
/// `end` is always `start + seating duration`; a slot may cross midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    /// Panics if `start + duration` leaves chrono's range; untrusted input
    /// goes through [`TimeSlot::try_new`].
    pub fn new(start: NaiveDateTime, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// `None` when the end falls outside the representable date range
    pub fn try_new(start: NaiveDateTime, duration: Duration) -> Option<Self> {
        start
            .checked_add_signed(duration)
            .map(|end| Self { start, end })
    }

    /// Back-to-back slots (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Reservation entity (预订)
///
/// Immutable once admitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub table_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub party_size: i32,
    /// Unix millis
    pub created_at: i64,
}

impl Reservation {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot {
            start: self.start,
            end: self.end,
        }
    }

    pub fn overlaps(&self, slot: &TimeSlot) -> bool {
        self.slot().overlaps(slot)
    }
}

/// Create reservation payload
///
/// `date` is `YYYY-MM-DD`, `time` is `HH:MM`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub table_id: i64,
    pub date: String,
    pub time: String,
    pub party_size: i32,
}

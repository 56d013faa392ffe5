//! Reservation Ledger
//!
//! Source of truth for table occupancy.
//!
//! # Backends
//!
//! | Backend | Type | Durability |
//! |---------|------|------------|
//! | `memory` | [`MemoryLedger`] | process lifetime |
//! | `redb` | [`RedbLedger`] | on disk, survives restarts |
//!
//! `insert` is an atomic check-and-insert in both backends. The admission
//! controller additionally serializes writers per table, so the ledger-level
//! check is the last line and should never fire in practice.

mod memory;
mod storage;

pub use memory::MemoryLedger;
pub use storage::RedbLedger;

use chrono::NaiveDateTime;
use shared::models::{Reservation, TimeSlot};
use thiserror::Error;

/// Ledger errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Reservation overlaps an existing booking on table {table_id} ({start} - {end})")]
    Conflict {
        table_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

pub trait ReservationLedger: Send + Sync {
    /// Reservations on `table_id` whose window intersects `slot`, ordered by start
    fn reservations_overlapping(&self, table_id: i64, slot: &TimeSlot)
    -> LedgerResult<Vec<Reservation>>;

    /// Every reservation (any table) intersecting `slot`, read from one snapshot
    fn overlapping_in_window(&self, slot: &TimeSlot) -> LedgerResult<Vec<Reservation>>;

    /// Add `reservation` only if nothing overlaps it on its table at this instant
    fn insert(&self, reservation: &Reservation) -> LedgerResult<()>;

    /// Number of stored reservations
    fn count(&self) -> LedgerResult<u64>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::{Duration, NaiveDate};

    pub fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    pub fn slot(h: u32, m: u32) -> TimeSlot {
        TimeSlot::new(at(h, m), Duration::minutes(120))
    }

    pub fn reservation(id: i64, table_id: i64, h: u32, m: u32) -> Reservation {
        let s = slot(h, m);
        Reservation {
            id,
            table_id,
            start: s.start,
            end: s.end,
            party_size: 2,
            created_at: 0,
        }
    }

    /// Contract checks shared by every backend
    pub fn exercise_ledger(ledger: &dyn ReservationLedger) {
        ledger.insert(&reservation(1, 1, 18, 0)).unwrap();
        ledger.insert(&reservation(2, 2, 18, 0)).unwrap();
        // back-to-back on table 1 is fine
        ledger.insert(&reservation(3, 1, 20, 0)).unwrap();
        ledger.insert(&reservation(4, 1, 12, 0)).unwrap();

        // overlapping on table 1 is rejected
        let err = ledger.insert(&reservation(5, 1, 19, 0)).unwrap_err();
        assert!(matches!(err, LedgerError::Conflict { table_id: 1, .. }));
        assert_eq!(ledger.count().unwrap(), 4);

        let hits = ledger.reservations_overlapping(1, &slot(19, 0)).unwrap();
        let ids: Vec<_> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 3]);

        assert!(ledger.reservations_overlapping(1, &slot(14, 0)).unwrap().is_empty());
        assert!(ledger.reservations_overlapping(9, &slot(18, 0)).unwrap().is_empty());

        let mut window: Vec<_> = ledger
            .overlapping_in_window(&slot(17, 0))
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        window.sort();
        assert_eq!(window, [1, 2]);
    }
}

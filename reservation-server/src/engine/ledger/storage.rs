//! redb-based durable ledger
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `reservations` | `(table_id, start_millis)` | `Reservation` (JSON) | Reservation book, ordered per table |
//! | `booked_tables` | `table_id` | `()` | Tables that have at least one reservation |
//!
//! A window query range-scans each booked table backwards from the window
//! end. Reservations on one table never overlap, so the scan stops at the
//! first one that ends before the window starts; cost follows the number of
//! booked tables, not the size of the history.
//!
//! # Durability
//!
//! redb commits are persistent once `commit()` returns (copy-on-write with
//! atomic pointer swap), so an admitted reservation survives power loss.
//! redb serializes write transactions, which makes the overlap check and the
//! insert in [`RedbLedger::insert`] one atomic step.

use redb::{
    Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
};
use shared::models::{Reservation, TimeSlot};
use std::path::Path;
use std::sync::Arc;

use super::{LedgerError, LedgerResult, ReservationLedger};

/// Table for reservations: key = (table_id, start millis), value = JSON-serialized Reservation
const RESERVATIONS_TABLE: TableDefinition<(i64, i64), &[u8]> =
    TableDefinition::new("reservations");

/// Index of table ids present in `reservations`
const BOOKED_TABLES: TableDefinition<i64, ()> = TableDefinition::new("booked_tables");

/// Reservation ledger backed by redb
#[derive(Clone)]
pub struct RedbLedger {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbLedger").finish_non_exhaustive()
    }
}

fn millis(t: chrono::NaiveDateTime) -> i64 {
    t.and_utc().timestamp_millis()
}

impl RedbLedger {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> LedgerResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> LedgerResult<Self> {
        // Create tables if they don't exist
        let write_txn = db.begin_write()?;
        {
            let reservations = write_txn.open_table(RESERVATIONS_TABLE)?;
            let mut booked = write_txn.open_table(BOOKED_TABLES)?;
            // 旧文件没有索引，按已有数据补齐
            if booked.is_empty()? && !reservations.is_empty()? {
                for result in reservations.iter()? {
                    let (key, _value) = result?;
                    booked.insert(key.value().0, ())?;
                }
            }
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn collect_overlapping<T>(table: &T, table_id: i64, slot: &TimeSlot) -> LedgerResult<Vec<Reservation>>
    where
        T: ReadableTable<(i64, i64), &'static [u8]>,
    {
        let mut hits = Vec::new();
        let range_start = (table_id, i64::MIN);
        let range_end = (table_id, millis(slot.end));

        for result in table.range(range_start..range_end)?.rev() {
            let (_key, value) = result?;
            let reservation: Reservation = serde_json::from_slice(value.value())?;
            if reservation.end <= slot.start {
                break;
            }
            hits.push(reservation);
        }
        hits.reverse();
        Ok(hits)
    }
}

impl ReservationLedger for RedbLedger {
    fn reservations_overlapping(
        &self,
        table_id: i64,
        slot: &TimeSlot,
    ) -> LedgerResult<Vec<Reservation>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESERVATIONS_TABLE)?;
        Self::collect_overlapping(&table, table_id, slot)
    }

    fn overlapping_in_window(&self, slot: &TimeSlot) -> LedgerResult<Vec<Reservation>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESERVATIONS_TABLE)?;
        let booked = read_txn.open_table(BOOKED_TABLES)?;

        let mut hits = Vec::new();
        for result in booked.iter()? {
            let (table_id, _) = result?;
            hits.extend(Self::collect_overlapping(&table, table_id.value(), slot)?);
        }
        Ok(hits)
    }

    fn insert(&self, reservation: &Reservation) -> LedgerResult<()> {
        let write_txn = self.db.begin_write()?;
        let conflict = {
            let mut table = write_txn.open_table(RESERVATIONS_TABLE)?;
            let existing =
                Self::collect_overlapping(&table, reservation.table_id, &reservation.slot())?;
            match existing.into_iter().next() {
                Some(existing) => Some(existing),
                None => {
                    let key = (reservation.table_id, millis(reservation.start));
                    let value = serde_json::to_vec(reservation)?;
                    table.insert(key, value.as_slice())?;
                    write_txn.open_table(BOOKED_TABLES)?.insert(reservation.table_id, ())?;
                    None
                }
            }
        };

        if let Some(existing) = conflict {
            write_txn.abort()?;
            return Err(LedgerError::Conflict {
                table_id: reservation.table_id,
                start: existing.start,
                end: existing.end,
            });
        }

        write_txn.commit()?;
        Ok(())
    }

    fn count(&self) -> LedgerResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESERVATIONS_TABLE)?;
        Ok(table.len()?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_redb_ledger_contract() {
        let ledger = RedbLedger::open_in_memory().unwrap();
        exercise_ledger(&ledger);
    }

    #[test]
    fn test_redb_ledger_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.redb");

        {
            let ledger = RedbLedger::open(&path).unwrap();
            ledger.insert(&reservation(1, 3, 18, 0)).unwrap();
        }

        let ledger = RedbLedger::open(&path).unwrap();
        assert_eq!(ledger.count().unwrap(), 1);
        let hits = ledger.reservations_overlapping(3, &slot(19, 0)).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert!(ledger.insert(&reservation(2, 3, 19, 30)).is_err());
        assert_eq!(ledger.count().unwrap(), 1);
        let window = ledger.overlapping_in_window(&slot(19, 0)).unwrap();
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_window_query_walks_back_past_long_history() {
        let ledger = RedbLedger::open_in_memory().unwrap();
        // 一天里同一桌的多段预订，外加另一桌
        for (id, hour) in [(1, 8), (2, 10), (3, 12), (4, 14), (5, 16), (6, 18)] {
            ledger.insert(&reservation(id, 1, hour, 0)).unwrap();
        }
        ledger.insert(&reservation(7, 2, 15, 0)).unwrap();

        let hits = ledger.reservations_overlapping(1, &slot(15, 0)).unwrap();
        let ids: Vec<_> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, [4, 5]);

        let mut window: Vec<_> = ledger
            .overlapping_in_window(&slot(15, 0))
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        window.sort();
        assert_eq!(window, [4, 5, 7]);
    }
}

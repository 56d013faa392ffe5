//! In-memory ledger

use chrono::NaiveDateTime;
use parking_lot::RwLock;
use shared::models::{Reservation, TimeSlot};
use std::collections::{BTreeMap, HashMap};

use super::{LedgerError, LedgerResult, ReservationLedger};

type TableBook = BTreeMap<NaiveDateTime, Reservation>;

/// Reservations per table, ordered by start time
#[derive(Debug, Default)]
pub struct MemoryLedger {
    books: RwLock<HashMap<i64, TableBook>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Walk back from `slot.end`; bookings on one table are disjoint, so the
/// first one ending at or before `slot.start` closes the scan.
fn overlapping<'a>(book: &'a TableBook, slot: &TimeSlot) -> Vec<&'a Reservation> {
    let mut hits: Vec<_> = book
        .range(..slot.end)
        .rev()
        .map(|(_, r)| r)
        .take_while(|r| r.end > slot.start)
        .collect();
    hits.reverse();
    hits
}

impl ReservationLedger for MemoryLedger {
    fn reservations_overlapping(
        &self,
        table_id: i64,
        slot: &TimeSlot,
    ) -> LedgerResult<Vec<Reservation>> {
        let books = self.books.read();
        Ok(books
            .get(&table_id)
            .map(|book| overlapping(book, slot).into_iter().cloned().collect())
            .unwrap_or_default())
    }

    fn overlapping_in_window(&self, slot: &TimeSlot) -> LedgerResult<Vec<Reservation>> {
        let books = self.books.read();
        Ok(books
            .values()
            .flat_map(|book| overlapping(book, slot).into_iter().cloned())
            .collect())
    }

    fn insert(&self, reservation: &Reservation) -> LedgerResult<()> {
        let slot = reservation.slot();
        let mut books = self.books.write();
        let book = books.entry(reservation.table_id).or_default();
        if let Some(existing) = overlapping(book, &slot).first() {
            return Err(LedgerError::Conflict {
                table_id: reservation.table_id,
                start: existing.start,
                end: existing.end,
            });
        }
        book.insert(reservation.start, reservation.clone());
        Ok(())
    }

    fn count(&self) -> LedgerResult<u64> {
        let books = self.books.read();
        Ok(books.values().map(|b| b.len() as u64).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_memory_ledger_contract() {
        exercise_ledger(&MemoryLedger::new());
    }

    #[test]
    fn test_conflict_reports_existing_window() {
        let ledger = MemoryLedger::new();
        ledger.insert(&reservation(1, 7, 18, 0)).unwrap();
        match ledger.insert(&reservation(2, 7, 18, 30)) {
            Err(LedgerError::Conflict { start, end, .. }) => {
                assert_eq!(start, at(18, 0));
                assert_eq!(end, at(20, 0));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }
}

//! Availability Resolver
//!
//! Pure flag pass over the catalog: one [`AvailabilityRecord`] per table, in
//! catalog order. No ranking happens here.

use shared::models::{AvailabilityRecord, DiningTable, TimeSlot, Zone};
use std::collections::HashSet;
use std::sync::Arc;

use super::catalog::TableCatalog;
use super::ledger::ReservationLedger;
use super::{EngineError, EngineResult};

pub fn validate_party_size(party_size: i32) -> EngineResult<()> {
    if party_size <= 0 {
        return Err(EngineError::InvalidPartySize(party_size));
    }
    Ok(())
}

/// Static fit only: capacity and (optional) zone, independent of occupancy
pub fn is_suitable(table: &DiningTable, party_size: i32, zone: Option<Zone>) -> bool {
    table.capacity >= party_size && zone.is_none_or(|z| table.zone == z)
}

#[derive(Clone)]
pub struct AvailabilityResolver {
    catalog: Arc<dyn TableCatalog>,
    ledger: Arc<dyn ReservationLedger>,
}

impl AvailabilityResolver {
    pub fn new(catalog: Arc<dyn TableCatalog>, ledger: Arc<dyn ReservationLedger>) -> Self {
        Self { catalog, ledger }
    }

    pub fn resolve(
        &self,
        slot: &TimeSlot,
        party_size: i32,
        zone: Option<Zone>,
    ) -> EngineResult<Vec<AvailabilityRecord>> {
        validate_party_size(party_size)?;

        let tables = self.catalog.list_tables();
        // One ledger read for the whole floor keeps the answer point-in-time
        let occupied: HashSet<i64> = self
            .ledger
            .overlapping_in_window(slot)?
            .into_iter()
            .map(|r| r.table_id)
            .collect();

        let records: Vec<AvailabilityRecord> = tables
            .iter()
            .map(|table| {
                AvailabilityRecord::from_table(
                    table,
                    occupied.contains(&table.id),
                    is_suitable(table, party_size, zone),
                )
            })
            .collect();

        tracing::debug!(
            start = %slot.start,
            party_size,
            zone = ?zone,
            tables = records.len(),
            occupied = occupied.len(),
            "Availability resolved"
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::MemoryCatalog;
    use crate::engine::ledger::test_support::{reservation, slot};
    use crate::engine::ledger::MemoryLedger;

    fn resolver(tables: Vec<DiningTable>, ledger: Arc<MemoryLedger>) -> AvailabilityResolver {
        AvailabilityResolver::new(Arc::new(MemoryCatalog::new(tables).unwrap()), ledger)
    }

    #[test]
    fn test_free_table_is_suitable() {
        let r = resolver(
            vec![DiningTable::new(1, "T1", Zone::MainHall, 4)],
            Arc::new(MemoryLedger::new()),
        );
        let records = r.resolve(&slot(18, 0), 2, None).unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].occupied);
        assert!(records[0].suitable);
    }

    #[test]
    fn test_party_too_large_is_unsuitable() {
        let r = resolver(
            vec![DiningTable::new(1, "T1", Zone::MainHall, 4)],
            Arc::new(MemoryLedger::new()),
        );
        let records = r.resolve(&slot(18, 0), 6, None).unwrap();
        assert!(!records[0].suitable);
        assert!(!records[0].occupied);
    }

    #[test]
    fn test_overlapping_reservation_marks_occupied() {
        let ledger = Arc::new(MemoryLedger::new());
        // existing 90 minute booking 18:00-19:30
        let mut existing = reservation(1, 1, 18, 0);
        existing.end = existing.start + chrono::Duration::minutes(90);
        ledger.insert(&existing).unwrap();
        let r = resolver(vec![DiningTable::new(1, "T1", Zone::MainHall, 4)], ledger);

        // occupied regardless of suitability, and never a candidate
        for party in [2, 6] {
            let records = r.resolve(&slot(18, 30), party, None).unwrap();
            assert!(records[0].occupied);
            assert!(!records[0].is_candidate());
        }
        // starting exactly when the booking ends is free
        let later = r.resolve(&slot(19, 30), 2, None).unwrap();
        assert!(!later[0].occupied);
    }

    #[test]
    fn test_zone_filter_and_catalog_order() {
        let r = resolver(
            vec![
                DiningTable::new(2, "T6", Zone::Terrace, 2),
                DiningTable::new(1, "T1", Zone::MainHall, 2),
                DiningTable::new(3, "P1", Zone::PrivateRoom, 4),
            ],
            Arc::new(MemoryLedger::new()),
        );
        let records = r.resolve(&slot(12, 0), 2, Some(Zone::Terrace)).unwrap();
        let codes: Vec<_> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["P1", "T1", "T6"]);
        let suitable: Vec<_> = records.iter().map(|r| r.suitable).collect();
        assert_eq!(suitable, [false, false, true]);
    }

    #[test]
    fn test_suitability_is_monotonic_in_party_size() {
        let tables = [
            DiningTable::new(1, "T1", Zone::MainHall, 2),
            DiningTable::new(2, "T2", Zone::Terrace, 4),
            DiningTable::new(3, "P2", Zone::PrivateRoom, 8),
        ];
        for table in &tables {
            for zone in [None, Some(Zone::MainHall), Some(Zone::Terrace)] {
                for n in 1..=10 {
                    if is_suitable(table, n, zone) {
                        for m in 1..=n {
                            assert!(is_suitable(table, m, zone), "{} n={n} m={m}", table.code);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_non_positive_party_size_rejected() {
        let r = resolver(
            vec![DiningTable::new(1, "T1", Zone::MainHall, 4)],
            Arc::new(MemoryLedger::new()),
        );
        for bad in [0, -3] {
            assert!(matches!(
                r.resolve(&slot(18, 0), bad, None),
                Err(EngineError::InvalidPartySize(n)) if n == bad
            ));
        }
    }
}

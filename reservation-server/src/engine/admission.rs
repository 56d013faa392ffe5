//! Admission Controller
//!
//! The only writer of the ledger. Each table has its own async mutex; an
//! admission holds it across re-check and insert, so two overlapping
//! requests for the same table can never both commit.
//!
//! ```text
//! admit(table, slot, party)
//!   ├─ validate (party > 0, table exists, party <= capacity)
//!   ├─ lock(table)            ← per-table, other tables unaffected
//!   ├─ reservations_overlapping(table, slot)   ← fresh read, never cached
//!   ├─ ledger.insert(..)      ← synchronous, all-or-nothing
//!   └─ unlock (guard drop, also on cancel)
//! ```

use dashmap::DashMap;
use shared::models::{Reservation, TimeSlot};
use shared::util::{now_millis, snowflake_id};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::availability::validate_party_size;
use super::catalog::TableCatalog;
use super::ledger::ReservationLedger;
use super::{EngineError, EngineResult};

pub struct AdmissionController {
    catalog: Arc<dyn TableCatalog>,
    ledger: Arc<dyn ReservationLedger>,
    /// table_id → admission lock. Only ids that exist in the catalog get an
    /// entry, so the map is bounded by the floor size.
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl std::fmt::Debug for AdmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionController")
            .field("locks", &self.locks.len())
            .finish_non_exhaustive()
    }
}

impl AdmissionController {
    pub fn new(catalog: Arc<dyn TableCatalog>, ledger: Arc<dyn ReservationLedger>) -> Self {
        Self {
            catalog,
            ledger,
            locks: DashMap::new(),
        }
    }

    pub(crate) fn table_lock(&self, table_id: i64) -> Arc<Mutex<()>> {
        // shard guard is released at the end of this statement, before any await
        self.locks.entry(table_id).or_default().clone()
    }

    pub async fn admit(
        &self,
        table_id: i64,
        slot: TimeSlot,
        party_size: i32,
    ) -> EngineResult<Reservation> {
        validate_party_size(party_size)?;
        let table = self
            .catalog
            .get_table(table_id)
            .ok_or(EngineError::TableNotFound(table_id))?;
        if party_size > table.capacity {
            return Err(EngineError::CapacityExceeded {
                table_id,
                capacity: table.capacity,
                party_size,
            });
        }

        let lock = self.table_lock(table_id);
        let _guard = lock.lock().await;

        // 临界区：必须重新读取，查询阶段的结果可能已经过期
        if let Some(existing) = self
            .ledger
            .reservations_overlapping(table_id, &slot)?
            .into_iter()
            .next()
        {
            tracing::warn!(
                table_id,
                start = %slot.start,
                existing_id = existing.id,
                existing_start = %existing.start,
                "Admission rejected: slot already taken"
            );
            return Err(EngineError::Conflict {
                table_id,
                start: existing.start,
                end: existing.end,
            });
        }

        let reservation = Reservation {
            id: snowflake_id(),
            table_id,
            start: slot.start,
            end: slot.end,
            party_size,
            created_at: now_millis(),
        };

        if let Err(e) = self.ledger.insert(&reservation) {
            let err = EngineError::from(e);
            if !err.is_conflict() {
                tracing::error!(table_id, error = %err, "Failed to persist reservation");
            }
            return Err(err);
        }

        tracing::info!(
            table_id,
            table_code = %table.code,
            reservation_id = reservation.id,
            start = %reservation.start,
            party_size,
            "Reservation admitted"
        );

        Ok(reservation)
    }
}

//! Booking engine
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Table Catalog (read-only floor) |
//! | [`ledger`] | Reservation Ledger (memory / redb) |
//! | [`availability`] | Availability Resolver |
//! | [`recommend`] | Recommendation Engine |
//! | [`admission`] | Admission Controller (per-table locking) |
//!
//! [`BookingEngine`] glues them together and takes raw request strings, so
//! parsing and validation live in one place.

pub mod admission;
pub mod availability;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod recommend;
pub mod slot;

pub use admission::AdmissionController;
pub use availability::AvailabilityResolver;
pub use catalog::{CatalogError, MemoryCatalog, TableCatalog};
pub use error::{EngineError, EngineResult};
pub use ledger::{LedgerError, MemoryLedger, RedbLedger, ReservationLedger};
pub use recommend::{Recommender, ScoringWeights};

use chrono::Duration;
use shared::models::{
    AvailabilityQuery, AvailabilityRecord, DiningTable, Recommendation, RecommendationQuery,
    Reservation, ReservationCreate, TimeSlot, Zone,
};
use std::sync::Arc;

/// Engine tuning
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Length of one seating
    pub seating_duration: Duration,
    /// Runner-ups returned next to the recommended table
    pub top_candidates: usize,
    pub weights: ScoringWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seating_duration: Duration::minutes(120),
            top_candidates: 4,
            weights: ScoringWeights::default(),
        }
    }
}

fn parse_zone(zone: Option<&str>) -> EngineResult<Option<Zone>> {
    match zone.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<Zone>()
            .map(Some)
            .map_err(|_| EngineError::InvalidZone(raw.to_string())),
    }
}

pub struct BookingEngine {
    catalog: Arc<dyn TableCatalog>,
    ledger: Arc<dyn ReservationLedger>,
    resolver: AvailabilityResolver,
    recommender: Recommender,
    admission: AdmissionController,
    config: EngineConfig,
}

impl std::fmt::Debug for BookingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BookingEngine {
    pub fn new(
        catalog: Arc<dyn TableCatalog>,
        ledger: Arc<dyn ReservationLedger>,
        config: EngineConfig,
    ) -> Self {
        Self {
            resolver: AvailabilityResolver::new(catalog.clone(), ledger.clone()),
            recommender: Recommender::new(config.weights, config.top_candidates),
            admission: AdmissionController::new(catalog.clone(), ledger.clone()),
            catalog,
            ledger,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<dyn ReservationLedger> {
        &self.ledger
    }

    pub fn slot(&self, date: &str, time: &str) -> EngineResult<TimeSlot> {
        slot::parse_slot(date, time, self.config.seating_duration)
    }

    pub fn list_tables(&self) -> Vec<DiningTable> {
        self.catalog.list_tables().to_vec()
    }

    pub fn availability(&self, query: &AvailabilityQuery) -> EngineResult<Vec<AvailabilityRecord>> {
        let slot = self.slot(&query.date, &query.time)?;
        let zone = parse_zone(query.zone.as_deref())?;
        self.resolver.resolve(&slot, query.party_size, zone)
    }

    pub fn recommend(&self, query: &RecommendationQuery) -> EngineResult<Recommendation> {
        let slot = self.slot(&query.date, &query.time)?;
        let zone = parse_zone(query.zone.as_deref())?;
        let requested = recommend::parse_features(query.features.as_deref());

        let records = self.resolver.resolve(&slot, query.party_size, zone)?;
        Ok(self
            .recommender
            .recommend(&records, query.party_size, zone, &requested))
    }

    pub async fn create_reservation(&self, req: &ReservationCreate) -> EngineResult<Reservation> {
        let slot = self.slot(&req.date, &req.time)?;
        self.admission.admit(req.table_id, slot, req.party_size).await
    }

    /// Admit an already-built slot (seeder path)
    pub async fn admit(
        &self,
        table_id: i64,
        slot: TimeSlot,
        party_size: i32,
    ) -> EngineResult<Reservation> {
        self.admission.admit(table_id, slot, party_size).await
    }

    pub fn reservation_count(&self) -> EngineResult<u64> {
        Ok(self.ledger.count()?)
    }
}

//! Availability & Recommendation DTOs
//!
//! Derived per query, never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{DiningTable, Zone};

/// Per-table availability for one query slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    pub id: i64,
    pub code: String,
    pub zone: Zone,
    pub capacity: i32,
    pub features: BTreeSet<String>,
    pub x: i32,
    pub y: i32,
    /// A reservation overlaps the query slot
    pub occupied: bool,
    /// Capacity and zone constraints are satisfied (独立于占用状态)
    pub suitable: bool,
}

impl AvailabilityRecord {
    pub fn from_table(table: &DiningTable, occupied: bool, suitable: bool) -> Self {
        Self {
            id: table.id,
            code: table.code.clone(),
            zone: table.zone,
            capacity: table.capacity,
            features: table.features.clone(),
            x: table.x,
            y: table.y,
            occupied,
            suitable,
        }
    }

    /// Free and suitable
    pub fn is_candidate(&self) -> bool {
        !self.occupied && self.suitable
    }
}

/// A scored, bookable table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub code: String,
    pub zone: Zone,
    pub capacity: i32,
    pub features: BTreeSet<String>,
    pub x: i32,
    pub y: i32,
    pub score: i32,
    /// Spare seats (capacity - party size)
    pub capacity_fit: i32,
    pub matched_features: Vec<String>,
}

/// Recommendation result: best pick plus runner-ups (top pick excluded)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommended: Option<Candidate>,
    pub top_candidates: Vec<Candidate>,
}

/// Query string for `GET /api/availability`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub date: String,
    pub time: String,
    pub party_size: i32,
    pub zone: Option<String>,
}

/// Query string for `GET /api/recommendation`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationQuery {
    pub date: String,
    pub time: String,
    pub party_size: i32,
    pub zone: Option<String>,
    /// Comma-separated feature tags, e.g. `window,quiet`
    pub features: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_table() {
        let table = DiningTable::new(1, "T1", Zone::MainHall, 4).with_features(["window"]);
        let record = AvailabilityRecord::from_table(&table, false, true);
        assert!(record.is_candidate());
        assert_eq!(record.code, "T1");

        let busy = AvailabilityRecord::from_table(&table, true, true);
        assert!(!busy.is_candidate());
    }

    #[test]
    fn test_recommendation_serialize_empty() {
        let json = serde_json::to_value(Recommendation::default()).unwrap();
        assert!(json["recommended"].is_null());
        assert_eq!(json["topCandidates"].as_array().unwrap().len(), 0);
    }
}

//! Recommendation Engine
//!
//! Scores free, suitable tables and ranks them.
//!
//! ```text
//! score = max(0, base
//!              - capacity_penalty * (capacity - party_size)
//!              + feature_weight   * |features ∩ requested|
//!              + zone_weight      * zone_bonus)
//! ```
//!
//! Wasted seats dominate; feature and zone bonuses only reorder tables of a
//! similar size. Ranking: score desc, spare seats asc, table id asc.

use shared::models::{AvailabilityRecord, Candidate, Recommendation, Zone};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Scoring weights (configurable, see `Config`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub base: i32,
    pub capacity_penalty: i32,
    pub feature_weight: i32,
    pub zone_weight: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 100,
            capacity_penalty: 10,
            feature_weight: 20,
            zone_weight: 15,
        }
    }
}

/// Parse `"window, Quiet,,window"` into `{"quiet", "window"}`
pub fn parse_features(raw: Option<&str>) -> BTreeSet<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|f| f.trim().to_ascii_lowercase())
        .filter(|f| !f.is_empty())
        .collect()
}

/// Total order used for ranking
fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(a.capacity_fit.cmp(&b.capacity_fit))
        .then(a.id.cmp(&b.id))
}

#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    top_candidates: usize,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, top_candidates: usize) -> Self {
        Self {
            weights,
            top_candidates,
        }
    }

    pub fn score(
        &self,
        record: &AvailabilityRecord,
        party_size: i32,
        zone: Option<Zone>,
        requested: &BTreeSet<String>,
    ) -> Candidate {
        let w = &self.weights;
        let capacity_fit = record.capacity - party_size;
        let matched_features: Vec<String> =
            record.features.intersection(requested).cloned().collect();
        let zone_bonus = i32::from(zone == Some(record.zone));

        let raw = i64::from(w.base) - i64::from(w.capacity_penalty) * i64::from(capacity_fit)
            + i64::from(w.feature_weight) * matched_features.len() as i64
            + i64::from(w.zone_weight) * i64::from(zone_bonus);
        let score = raw.clamp(0, i64::from(i32::MAX)) as i32;

        Candidate {
            id: record.id,
            code: record.code.clone(),
            zone: record.zone,
            capacity: record.capacity,
            features: record.features.clone(),
            x: record.x,
            y: record.y,
            score,
            capacity_fit,
            matched_features,
        }
    }

    /// Rank candidates from a resolver pass. An empty result is not an error.
    pub fn recommend(
        &self,
        records: &[AvailabilityRecord],
        party_size: i32,
        zone: Option<Zone>,
        requested: &BTreeSet<String>,
    ) -> Recommendation {
        let mut ranked: Vec<Candidate> = records
            .iter()
            .filter(|r| r.is_candidate())
            .map(|r| self.score(r, party_size, zone, requested))
            .collect();
        ranked.sort_by(rank);

        let mut ranked = ranked.into_iter();
        let recommended = ranked.next();
        let top_candidates = ranked.take(self.top_candidates).collect();

        Recommendation {
            recommended,
            top_candidates,
        }
    }
}

//! Dining Table Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Zone;

/// Dining table entity (桌台)
///
/// `x`/`y` are floor-plan grid coordinates for rendering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    /// Human code, e.g. "T1"
    pub code: String,
    pub zone: Zone,
    pub capacity: i32,
    /// Lower-case feature tags ("window", "quiet", ...)
    #[serde(default)]
    pub features: BTreeSet<String>,
    pub x: i32,
    pub y: i32,
}

impl DiningTable {
    pub fn new(id: i64, code: impl Into<String>, zone: Zone, capacity: i32) -> Self {
        Self {
            id,
            code: code.into(),
            zone,
            capacity,
            features: BTreeSet::new(),
            x: 0,
            y: 0,
        }
    }

    /// Builder: set floor position
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Builder: add feature tags (normalized to lower case)
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.features.extend(
            features
                .into_iter()
                .map(|f| f.as_ref().trim().to_ascii_lowercase())
                .filter(|f| !f.is_empty()),
        );
        self
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder_normalizes_features() {
        let table = DiningTable::new(1, "T1", Zone::MainHall, 4)
            .at(2, 3)
            .with_features(["Window", " quiet ", ""]);
        assert_eq!(table.x, 2);
        assert_eq!(table.y, 3);
        assert!(table.has_feature("window"));
        assert!(table.has_feature("quiet"));
        assert_eq!(table.features.len(), 2);
    }

    #[test]
    fn test_table_serialize_camel_case() {
        let table = DiningTable::new(7, "T7", Zone::Terrace, 4).with_features(["window"]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["code"], "T7");
        assert_eq!(json["zone"], "TERRACE");
        assert_eq!(json["features"][0], "window");
    }
}

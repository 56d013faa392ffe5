//! Zone Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Floor zone (区域：大厅、露台、包厢)
///
/// Serialized as `MAIN_HALL`, `TERRACE`, `PRIVATE_ROOM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    MainHall,
    Terrace,
    PrivateRoom,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::MainHall, Zone::Terrace, Zone::PrivateRoom];

    /// Wire name of the zone
    pub const fn as_str(&self) -> &'static str {
        match self {
            Zone::MainHall => "MAIN_HALL",
            Zone::Terrace => "TERRACE",
            Zone::PrivateRoom => "PRIVATE_ROOM",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a string does not name a known zone
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zone: {0}")]
pub struct ParseZoneError(pub String);

impl FromStr for Zone {
    type Err = ParseZoneError;

    /// Case-insensitive; `-` and spaces are accepted as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Zone::ALL
            .into_iter()
            .find(|z| z.as_str() == normalized)
            .ok_or_else(|| ParseZoneError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_parse() {
        assert_eq!("MAIN_HALL".parse::<Zone>().unwrap(), Zone::MainHall);
        assert_eq!("terrace".parse::<Zone>().unwrap(), Zone::Terrace);
        assert_eq!("private-room".parse::<Zone>().unwrap(), Zone::PrivateRoom);
        assert_eq!(" Main Hall ".parse::<Zone>().unwrap(), Zone::MainHall);
        assert!("ROOFTOP".parse::<Zone>().is_err());
    }

    #[test]
    fn test_zone_serde() {
        let json = serde_json::to_string(&Zone::PrivateRoom).unwrap();
        assert_eq!(json, "\"PRIVATE_ROOM\"");
        let zone: Zone = serde_json::from_str("\"MAIN_HALL\"").unwrap();
        assert_eq!(zone, Zone::MainHall);
    }
}

//! Public-health advisories surfaced alongside forecasts.
//!
//! Advisories are a curated feed; the prototype board carries a fixed set
//! and echoes the queried city. A real deployment would filter by city and
//! expiry timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Advisory severity, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Warning,
    Info,
}

/// One public-health advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub severity: Severity,
    pub title: String,
    pub detail: String,
    /// When the advisory stops applying; open-ended if absent
    pub expires: Option<DateTime<Utc>>,
}

/// Advisories for one city, as returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityAdvisories {
    pub city: String,
    pub advisories: Vec<Advisory>,
}

/// Holds the advisory feed served by the API.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryBoard {
    advisories: Vec<Advisory>,
}

impl AdvisoryBoard {
    pub fn new(advisories: Vec<Advisory>) -> Self {
        Self { advisories }
    }

    /// Board pre-seeded with the prototype advisory set.
    pub fn with_sample_advisories() -> Self {
        Self::new(vec![
            Advisory {
                severity: Severity::High,
                title: "Major festival in 3 days".to_string(),
                detail: "Expect +35% surge in trauma & respiratory cases. \
                         Staff augmentation required."
                    .to_string(),
                expires: None,
            },
            Advisory {
                severity: Severity::Warning,
                title: "High humidity & stagnant water".to_string(),
                detail: "Vector control advised - dengue risk rising.".to_string(),
                expires: None,
            },
            Advisory {
                severity: Severity::Info,
                title: "AQI improving over next 48 hours".to_string(),
                detail: "Monitor for waterborne diseases after rains.".to_string(),
                expires: None,
            },
        ])
    }

    /// Advisories applicable to `city`.
    pub fn for_city(&self, city: &str) -> CityAdvisories {
        CityAdvisories {
            city: city.to_string(),
            advisories: self.advisories.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.advisories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advisories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_board_has_three_advisories() {
        let board = AdvisoryBoard::with_sample_advisories();
        assert_eq!(board.len(), 3);
        let feed = board.for_city("Mumbai");
        assert_eq!(feed.advisories[0].severity, Severity::High);
        assert_eq!(feed.advisories[1].severity, Severity::Warning);
        assert_eq!(feed.advisories[2].severity, Severity::Info);
    }

    #[test]
    fn test_for_city_echoes_query() {
        let board = AdvisoryBoard::with_sample_advisories();
        assert_eq!(board.for_city("Pune").city, "Pune");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"info\"");
    }

    #[test]
    fn test_open_ended_expiry_serializes_null() {
        let board = AdvisoryBoard::with_sample_advisories();
        let json = serde_json::to_value(board.for_city("Mumbai")).unwrap();
        assert!(json["advisories"][0]["expires"].is_null());
        assert_eq!(json["advisories"][0]["title"], "Major festival in 3 days");
    }
}

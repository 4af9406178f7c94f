//! Resource requirement types derived from predicted patient inflow.
//!
//! Figures are computed per forecast day by the estimator service and are
//! never persisted; each request builds them fresh.

use serde::{Deserialize, Serialize};

/// Headline resource demand for a single forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSummary {
    /// Total staff required across all roles
    pub staff_required: u32,
    /// ICU beds required
    pub icu_required: u32,
    /// Oxygen demand in liters per day
    pub oxygen_needed_l_per_day: u64,
}

/// Staffing split for one forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffBreakdown {
    /// Total staff required (mirrors the summary figure)
    pub required: u32,
    /// Doctors, never below one
    pub doctors: u32,
    /// Nurses, never below one
    pub nurses: u32,
    /// Remaining support staff
    pub support: u32,
}

/// ICU bed split for one forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcuBreakdown {
    /// ICU beds required (mirrors the summary figure)
    pub required: u32,
    /// Beds that must be ventilator-equipped
    pub ventilator_beds: u32,
    /// Remaining non-ventilator ICU beds
    pub non_ventilator_beds: u32,
}

/// Oxygen demand detail for one forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OxygenBreakdown {
    /// Total oxygen demand in liters per day
    pub total_l_per_day: u64,
    /// Equivalent count of standard jumbo cylinders
    pub cylinders_approx: u64,
}

/// Full per-dimension breakdown backing a [`ResourceSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBreakdown {
    pub staff: StaffBreakdown,
    pub icu: IcuBreakdown,
    pub oxygen: OxygenBreakdown,
}

/// Summary plus breakdown, as attached to each forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResources {
    pub summary: ResourceSummary,
    pub breakdown: ResourceBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_expected_keys() {
        let summary = ResourceSummary {
            staff_required: 50,
            icu_required: 80,
            oxygen_needed_l_per_day: 20_000,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["staff_required"], 50);
        assert_eq!(json["icu_required"], 80);
        assert_eq!(json["oxygen_needed_l_per_day"], 20_000);
    }

    #[test]
    fn test_breakdown_nests_all_dimensions() {
        let breakdown = ResourceBreakdown {
            staff: StaffBreakdown {
                required: 50,
                doctors: 12,
                nurses: 25,
                support: 13,
            },
            icu: IcuBreakdown {
                required: 80,
                ventilator_beds: 32,
                non_ventilator_beds: 48,
            },
            oxygen: OxygenBreakdown {
                total_l_per_day: 20_000,
                cylinders_approx: 3,
            },
        };
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["staff"]["doctors"], 12);
        assert_eq!(json["icu"]["non_ventilator_beds"], 48);
        assert_eq!(json["oxygen"]["cylinders_approx"], 3);
    }
}

//! Hospital registry data and per-dimension capacity status types.

use serde::{Deserialize, Serialize};

/// Hospital identifier (registry key, e.g. "H123").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HospitalId(pub String);

impl HospitalId {
    pub fn new(value: impl Into<String>) -> Self {
        HospitalId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HospitalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HospitalId {
    fn from(value: &str) -> Self {
        HospitalId(value.to_string())
    }
}

/// Staffing roster of a hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffCapacity {
    pub doctors: u32,
    pub nurses: u32,
    pub support: u32,
}

impl StaffCapacity {
    /// Headcount across all roles.
    pub fn total(&self) -> u32 {
        self.doctors + self.nurses + self.support
    }
}

/// ICU bed inventory of a hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcuCapacity {
    pub ventilator_beds: u32,
    pub non_ventilator_beds: u32,
}

impl IcuCapacity {
    /// Bed count across both classes.
    pub fn total_beds(&self) -> u32 {
        self.ventilator_beds + self.non_ventilator_beds
    }
}

/// Oxygen supply infrastructure of a hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OxygenCapacity {
    /// Jumbo cylinders held in reserve
    pub cylinders: u32,
    /// Onsite generation plant output in liters per minute
    pub plant_output_lpm: u32,
    /// Liquid-oxygen tank output in liters per minute
    pub tanks_output_lpm: u32,
}

impl OxygenCapacity {
    /// Continuous supply rate in liters per minute (plant plus tanks;
    /// cylinders are reserve stock, not flow).
    pub fn total_output_lpm(&self) -> u32 {
        self.plant_output_lpm + self.tanks_output_lpm
    }
}

/// Read-only reference record for one hospital, owned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalProfile {
    pub id: HospitalId,
    pub name: String,
    pub city: String,
    pub staff: StaffCapacity,
    pub icu: IcuCapacity,
    pub oxygen: OxygenCapacity,
}

impl HospitalProfile {
    pub fn new(
        id: HospitalId,
        name: String,
        city: String,
        staff: StaffCapacity,
        icu: IcuCapacity,
        oxygen: OxygenCapacity,
    ) -> Self {
        Self {
            id,
            name,
            city,
            staff,
            icu,
            oxygen,
        }
    }
}

/// Staffing position of a hospital: requirement, availability, and shortfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffStatus {
    pub hospital_id: HospitalId,
    pub name: String,
    /// Heads required to run the hospital at its rostered size
    pub total_required: u32,
    /// Heads currently available
    pub available: u32,
    /// Shortfall, floored at zero
    pub deficit: u32,
    /// Rostered split by role
    pub breakdown: StaffCapacity,
}

/// ICU bed position of a hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcuStatus {
    pub hospital_id: HospitalId,
    pub name: String,
    /// Installed ICU beds across both classes
    pub total_beds: u32,
    /// Beds currently free
    pub available_beds: u32,
    /// Shortfall, floored at zero
    pub deficit: u32,
    /// Installed split by bed class
    pub breakdown: IcuCapacity,
}

/// Oxygen supply position of a hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OxygenStatus {
    pub hospital_id: HospitalId,
    pub name: String,
    /// Continuous supply capacity in liters per minute
    pub total_capacity_lpm: u32,
    /// Current draw in liters per minute
    pub current_usage_lpm: u32,
    /// Headroom shortfall, floored at zero
    pub deficit_lpm: u32,
    /// Supply infrastructure detail
    pub breakdown: OxygenCapacity,
}

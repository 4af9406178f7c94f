//! Public API surface for the backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::forecast::{
    ForecastBundle, ForecastPoint, ForecastResult, ForecastSource,
};
pub use crate::models::hospital::{
    HospitalId, HospitalProfile, IcuCapacity, IcuStatus, OxygenCapacity, OxygenStatus,
    StaffCapacity, StaffStatus,
};
pub use crate::models::resources::{
    DayResources, IcuBreakdown, OxygenBreakdown, ResourceBreakdown, ResourceSummary,
    StaffBreakdown,
};

pub use crate::alerts::{Advisory, CityAdvisories, Severity};

//! Current-availability source consulted by the capacity evaluator.
//!
//! The prototype has no live occupancy feed, so the default implementation
//! derives availability from rostered capacity: staff and ICU beds mirror
//! the roster, oxygen draw sits at a fixed share of output.

use crate::models::HospitalProfile;

/// Fraction of total oxygen output assumed drawn at any moment.
const OXYGEN_UTILIZATION: f64 = 0.9;

/// Snapshot source for what a hospital can actually field right now.
pub trait AvailabilitySource: Send + Sync {
    /// Staff currently on duty or callable.
    fn available_staff(&self, profile: &HospitalProfile) -> u32;

    /// ICU beds currently free.
    fn available_icu_beds(&self, profile: &HospitalProfile) -> u32;

    /// Oxygen draw right now, liters per minute.
    fn oxygen_usage_lpm(&self, profile: &HospitalProfile) -> u32;
}

/// Availability mirrored from rostered capacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct MirroredAvailability;

impl MirroredAvailability {
    pub fn new() -> Self {
        MirroredAvailability
    }
}

impl AvailabilitySource for MirroredAvailability {
    fn available_staff(&self, profile: &HospitalProfile) -> u32 {
        profile.staff.total()
    }

    fn available_icu_beds(&self, profile: &HospitalProfile) -> u32 {
        profile.icu.total_beds()
    }

    fn oxygen_usage_lpm(&self, profile: &HospitalProfile) -> u32 {
        (f64::from(profile.oxygen.total_output_lpm()) * OXYGEN_UTILIZATION).floor() as u32
    }
}

//! Ratio-based resource estimation from a daily patient count.
//!
//! All ratios floor their result, matching the planning tables this service
//! was derived from. The doctor and nurse floors of one apply even when the
//! staff total is zero, so at tiny counts the role split can exceed the
//! total; see [`estimate_resources`].

use crate::models::{
    IcuBreakdown, OxygenBreakdown, ResourceBreakdown, ResourceSummary, StaffBreakdown,
};

/// Staff required per patient.
pub const STAFF_RATIO: f64 = 0.05;
/// ICU beds required per patient.
pub const ICU_RATIO: f64 = 0.08;
/// Oxygen demand per patient, liters per day.
pub const OXYGEN_L_PER_PATIENT_DAY: u64 = 20;
/// Share of ICU beds that must be ventilator-equipped.
pub const VENTILATOR_SHARE: f64 = 0.4;
/// Usable capacity of one jumbo cylinder, liters.
pub const CYLINDER_CAPACITY_L: u64 = 6000;

/// Estimate the resources needed to absorb `patients` admissions in one day.
///
/// Deterministic and total: every patient count maps to exactly one result.
/// At `patients = 0` the staff total is zero while doctors and nurses are
/// each floored at one, so the role split exceeds the total at the boundary.
pub fn estimate_resources(patients: u32) -> (ResourceSummary, ResourceBreakdown) {
    let staff = (f64::from(patients) * STAFF_RATIO).floor() as u32;
    let icu = (f64::from(patients) * ICU_RATIO).floor() as u32;
    let oxygen = u64::from(patients) * OXYGEN_L_PER_PATIENT_DAY;

    let doctors = (staff / 4).max(1);
    let nurses = (staff / 2).max(1);
    // The remainder is taken against the unfloored quarters so the role sum
    // equals the staff total whenever staff >= 4
    let support = staff.saturating_sub(staff / 4 + staff / 2);

    let ventilator_beds = (f64::from(icu) * VENTILATOR_SHARE).floor() as u32;

    let summary = ResourceSummary {
        staff_required: staff,
        icu_required: icu,
        oxygen_needed_l_per_day: oxygen,
    };
    let breakdown = ResourceBreakdown {
        staff: StaffBreakdown {
            required: staff,
            doctors,
            nurses,
            support,
        },
        icu: IcuBreakdown {
            required: icu,
            ventilator_beds,
            non_ventilator_beds: icu - ventilator_beds,
        },
        oxygen: OxygenBreakdown {
            total_l_per_day: oxygen,
            cylinders_approx: oxygen / CYLINDER_CAPACITY_L,
        },
    };
    (summary, breakdown)
}

use proptest::prelude::*;

use crate::services::estimator::estimate_resources;

#[test]
fn test_thousand_patients_scenario() {
    let (summary, breakdown) = estimate_resources(1000);

    assert_eq!(summary.staff_required, 50);
    assert_eq!(summary.icu_required, 80);
    assert_eq!(summary.oxygen_needed_l_per_day, 20_000);

    assert_eq!(breakdown.staff.required, 50);
    assert_eq!(breakdown.staff.doctors, 12);
    assert_eq!(breakdown.staff.nurses, 25);
    assert_eq!(breakdown.staff.support, 13);

    assert_eq!(breakdown.icu.required, 80);
    assert_eq!(breakdown.icu.ventilator_beds, 32);
    assert_eq!(breakdown.icu.non_ventilator_beds, 48);

    assert_eq!(breakdown.oxygen.total_l_per_day, 20_000);
    assert_eq!(breakdown.oxygen.cylinders_approx, 3);
}

#[test]
fn test_zero_patients_keeps_minimum_clinicians() {
    let (summary, breakdown) = estimate_resources(0);

    assert_eq!(summary.staff_required, 0);
    assert_eq!(summary.icu_required, 0);
    assert_eq!(summary.oxygen_needed_l_per_day, 0);

    // The role floors exceed the zero total at the boundary
    assert_eq!(breakdown.staff.doctors, 1);
    assert_eq!(breakdown.staff.nurses, 1);
    assert_eq!(breakdown.staff.support, 0);

    assert_eq!(breakdown.icu.ventilator_beds, 0);
    assert_eq!(breakdown.icu.non_ventilator_beds, 0);
    assert_eq!(breakdown.oxygen.cylinders_approx, 0);
}

#[test]
fn test_small_counts_floor_to_zero_staff() {
    // 19 patients is below the 1/0.05 staffing threshold
    let (summary, breakdown) = estimate_resources(19);
    assert_eq!(summary.staff_required, 0);
    assert_eq!(breakdown.staff.doctors, 1);
    assert_eq!(breakdown.staff.nurses, 1);

    let (summary, _) = estimate_resources(20);
    assert_eq!(summary.staff_required, 1);
}

#[test]
fn test_cylinder_rounding_floors() {
    // 299 patients -> 5980 L, just under one cylinder
    let (_, breakdown) = estimate_resources(299);
    assert_eq!(breakdown.oxygen.total_l_per_day, 5980);
    assert_eq!(breakdown.oxygen.cylinders_approx, 0);

    let (_, breakdown) = estimate_resources(300);
    assert_eq!(breakdown.oxygen.cylinders_approx, 1);
}

proptest! {
    #[test]
    fn prop_roles_sum_to_staff_total_above_threshold(patients in 80u32..1_000_000) {
        let (summary, breakdown) = estimate_resources(patients);
        prop_assert!(summary.staff_required >= 4);
        prop_assert_eq!(
            breakdown.staff.doctors + breakdown.staff.nurses + breakdown.staff.support,
            summary.staff_required
        );
    }

    #[test]
    fn prop_icu_split_is_exact(patients in 0u32..1_000_000) {
        let (summary, breakdown) = estimate_resources(patients);
        prop_assert_eq!(
            breakdown.icu.ventilator_beds + breakdown.icu.non_ventilator_beds,
            summary.icu_required
        );
        prop_assert!(breakdown.icu.ventilator_beds <= summary.icu_required);
    }

    #[test]
    fn prop_oxygen_scales_linearly(patients in 0u32..1_000_000) {
        let (summary, breakdown) = estimate_resources(patients);
        prop_assert_eq!(summary.oxygen_needed_l_per_day, u64::from(patients) * 20);
        prop_assert_eq!(
            breakdown.oxygen.cylinders_approx,
            summary.oxygen_needed_l_per_day / 6000
        );
    }

    #[test]
    fn prop_summary_mirrors_breakdown(patients in 0u32..1_000_000) {
        let (summary, breakdown) = estimate_resources(patients);
        prop_assert_eq!(breakdown.staff.required, summary.staff_required);
        prop_assert_eq!(breakdown.icu.required, summary.icu_required);
        prop_assert_eq!(breakdown.oxygen.total_l_per_day, summary.oxygen_needed_l_per_day);
    }
}

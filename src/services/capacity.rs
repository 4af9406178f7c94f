//! Per-dimension hospital capacity evaluation.

use std::sync::Arc;
use thiserror::Error;

use crate::models::{HospitalId, HospitalProfile, IcuStatus, OxygenStatus, StaffStatus};
use crate::registry::{AvailabilitySource, HospitalRegistry, RegistryError};

/// Errors raised while evaluating a hospital's position.
#[derive(Debug, Error)]
pub enum CapacityError {
    #[error("hospital not found")]
    HospitalNotFound { id: HospitalId },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Answers staff, ICU, and oxygen status queries for registered hospitals.
///
/// Requirement figures come from the registry profile; availability comes
/// from the injected [`AvailabilitySource`]. Deficits floor at zero in every
/// dimension.
pub struct HospitalCapacityEvaluator {
    registry: Arc<dyn HospitalRegistry>,
    availability: Arc<dyn AvailabilitySource>,
}

impl HospitalCapacityEvaluator {
    pub fn new(
        registry: Arc<dyn HospitalRegistry>,
        availability: Arc<dyn AvailabilitySource>,
    ) -> Self {
        Self {
            registry,
            availability,
        }
    }

    async fn profile(&self, id: &HospitalId) -> Result<HospitalProfile, CapacityError> {
        self.registry
            .find_by_id(id)
            .await?
            .ok_or_else(|| CapacityError::HospitalNotFound { id: id.clone() })
    }

    pub async fn staff_status(&self, id: &HospitalId) -> Result<StaffStatus, CapacityError> {
        let profile = self.profile(id).await?;
        let total_required = profile.staff.total();
        let available = self.availability.available_staff(&profile);
        Ok(StaffStatus {
            hospital_id: profile.id,
            name: profile.name,
            total_required,
            available,
            deficit: total_required.saturating_sub(available),
            breakdown: profile.staff,
        })
    }

    pub async fn icu_status(&self, id: &HospitalId) -> Result<IcuStatus, CapacityError> {
        let profile = self.profile(id).await?;
        let total_beds = profile.icu.total_beds();
        let available_beds = self.availability.available_icu_beds(&profile);
        Ok(IcuStatus {
            hospital_id: profile.id,
            name: profile.name,
            total_beds,
            available_beds,
            deficit: total_beds.saturating_sub(available_beds),
            breakdown: profile.icu,
        })
    }

    pub async fn oxygen_status(&self, id: &HospitalId) -> Result<OxygenStatus, CapacityError> {
        let profile = self.profile(id).await?;
        let total_capacity_lpm = profile.oxygen.total_output_lpm();
        let current_usage_lpm = self.availability.oxygen_usage_lpm(&profile);
        Ok(OxygenStatus {
            hospital_id: profile.id,
            name: profile.name,
            total_capacity_lpm,
            current_usage_lpm,
            deficit_lpm: total_capacity_lpm.saturating_sub(current_usage_lpm),
            breakdown: profile.oxygen,
        })
    }
}

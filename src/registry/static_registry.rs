//! Statically embedded hospital table.
//!
//! Stands in for a live inventory system. The table is immutable after
//! construction, so it is shared without locking.

use async_trait::async_trait;
use std::collections::HashMap;

use super::{HospitalRegistry, RegistryResult};
use crate::models::{
    HospitalId, HospitalProfile, IcuCapacity, OxygenCapacity, StaffCapacity,
};

/// In-memory registry backed by a fixed table.
#[derive(Debug, Default)]
pub struct StaticHospitalRegistry {
    hospitals: HashMap<HospitalId, HospitalProfile>,
}

impl StaticHospitalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-seeded with the sample hospitals used by the prototype
    /// deployment.
    pub fn with_sample_hospitals() -> Self {
        let mut registry = Self::new();
        registry.insert(HospitalProfile::new(
            HospitalId::new("H123"),
            "City General Hospital".to_string(),
            "Mumbai".to_string(),
            StaffCapacity {
                doctors: 20,
                nurses: 60,
                support: 20,
            },
            IcuCapacity {
                ventilator_beds: 25,
                non_ventilator_beds: 95,
            },
            OxygenCapacity {
                cylinders: 120,
                plant_output_lpm: 4800,
                tanks_output_lpm: 2700,
            },
        ));
        registry.insert(HospitalProfile::new(
            HospitalId::new("H456"),
            "Eastside Medical Center".to_string(),
            "Mumbai".to_string(),
            StaffCapacity {
                doctors: 10,
                nurses: 30,
                support: 10,
            },
            IcuCapacity {
                ventilator_beds: 10,
                non_ventilator_beds: 40,
            },
            OxygenCapacity {
                cylinders: 50,
                plant_output_lpm: 2000,
                tanks_output_lpm: 1200,
            },
        ));
        registry
    }

    /// Add or replace a profile. Only meaningful before the registry is
    /// shared.
    pub fn insert(&mut self, profile: HospitalProfile) {
        self.hospitals.insert(profile.id.clone(), profile);
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }
}

#[async_trait]
impl HospitalRegistry for StaticHospitalRegistry {
    async fn find_by_id(&self, id: &HospitalId) -> RegistryResult<Option<HospitalProfile>> {
        Ok(self.hospitals.get(id).cloned())
    }

    async fn list_all(&self) -> RegistryResult<Vec<HospitalProfile>> {
        Ok(self.hospitals.values().cloned().collect())
    }
}

//! Hospital registry: read-only capacity reference data and the availability
//! source consulted when evaluating a hospital's current position.

pub mod availability;
pub mod static_registry;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{HospitalId, HospitalProfile};

pub use availability::{AvailabilitySource, MirroredAvailability};
pub use static_registry::StaticHospitalRegistry;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised by a registry backend.
///
/// The embedded table never fails, but the trait keeps the error channel so
/// a live inventory backend can slot in without changing callers.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry lookup failed: {0}")]
    Lookup(String),
}

/// Source of hospital capacity reference data.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait HospitalRegistry: Send + Sync {
    /// Look up one hospital by identifier.
    ///
    /// # Returns
    /// * `Ok(Some(profile))` - The hospital is registered
    /// * `Ok(None)` - The identifier is unknown
    /// * `Err(RegistryError)` - The backend failed to answer
    async fn find_by_id(&self, id: &HospitalId) -> RegistryResult<Option<HospitalProfile>>;

    /// List every registered hospital, in unspecified order.
    async fn list_all(&self) -> RegistryResult<Vec<HospitalProfile>>;
}

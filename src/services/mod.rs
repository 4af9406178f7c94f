//! Service layer for business logic and orchestration.
//!
//! Services sit between the forecasting/registry layers and the HTTP
//! handlers: resource estimation, forecast aggregation, and hospital
//! capacity evaluation.

pub mod aggregator;

pub mod capacity;

pub mod estimator;

#[cfg(test)]
#[path = "estimator_tests.rs"]
mod estimator_tests;

pub use aggregator::build_forecast_bundle;
pub use capacity::{CapacityError, HospitalCapacityEvaluator};
pub use estimator::estimate_resources;

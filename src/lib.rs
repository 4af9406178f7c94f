//! # HealthGuard Backend
//!
//! Hospital resource-demand forecasting engine.
//!
//! This crate provides a Rust backend for the HealthGuard platform, turning
//! patient-inflow forecasts into day-by-day resource requirements (staff, ICU
//! beds, oxygen) and evaluating hospital capacity against static registry data.
//! The backend exposes a REST API via Axum for the dashboard frontend.
//!
//! ## Features
//!
//! - **Forecasting**: Model-based inflow prediction with a synthetic fallback
//! - **Resource Estimation**: Ratio-driven staffing, ICU, and oxygen demand
//! - **Capacity Evaluation**: Staff, ICU, and oxygen status per hospital
//! - **City Advisories**: Public-health advisories served alongside forecasts
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`forecast`]: Inflow samplers, the model artifact, and the forecast provider
//! - [`registry`]: Hospital registry and availability sources
//! - [`services`]: Resource estimation, aggregation, and capacity evaluation
//! - [`http`]: Axum-based HTTP server and request handlers
//!

pub mod api;

pub mod alerts;
pub mod config;
pub mod models;

pub mod forecast;
pub mod registry;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

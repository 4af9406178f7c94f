//! HealthGuard HTTP Server Binary
//!
//! This is the main entry point for the HealthGuard REST API server.
//! It loads configuration, attempts the one-time model-artifact load, seeds
//! the hospital registry, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin healthguard-server --features "http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0, overrides config)
//! - `PORT`: Server port (default: 8080, overrides config)
//! - `MODEL_PATH`: Inflow model artifact path (overrides config)
//! - `HEALTHGUARD_CONFIG`: Explicit configuration file path
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use healthguard::alerts::AdvisoryBoard;
use healthguard::config::AppConfig;
use healthguard::forecast::ForecastProvider;
use healthguard::http::{create_router, AppState};
use healthguard::registry::{HospitalRegistry, MirroredAvailability, StaticHospitalRegistry};
use healthguard::services::HospitalCapacityEvaluator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting HealthGuard HTTP Server");

    let config = AppConfig::load()?;

    // Attempt the one-time model load; absence leaves the synthetic fallback
    let model_path = env::var("MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| config.forecast.model_path.clone());
    let provider = Arc::new(
        ForecastProvider::from_artifact(&model_path)
            .with_max_horizon(config.forecast.max_horizon_days),
    );
    if provider.has_model() {
        info!("Forecasts served from the trained model at {}", model_path.display());
    } else {
        info!("Forecasts served from the synthetic generator");
    }

    // Seed the registry and wire the capacity evaluator
    let registry = Arc::new(StaticHospitalRegistry::with_sample_hospitals());
    let hospital_count = registry.list_all().await?.len();
    info!("Hospital registry seeded with {} hospitals", hospital_count);

    let evaluator = Arc::new(HospitalCapacityEvaluator::new(
        registry,
        Arc::new(MirroredAvailability::new()),
    ));
    let advisories = Arc::new(AdvisoryBoard::with_sample_advisories());

    // Create application state
    let state = AppState::new(provider, evaluator, advisories);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or(config.server.host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

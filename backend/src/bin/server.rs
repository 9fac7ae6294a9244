//! DFW Flights HTTP Server Binary
//!
//! Loads the dashboard configuration, validates the generator settings and
//! serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin dfw-flights-server
//!
//! # Different seed and window
//! DASHBOARD_SEED=7 DASHBOARD_WINDOW_DAYS=60 cargo run --bin dfw-flights-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a TOML config file (default: search for `dashboard.toml`)
//! - `DASHBOARD_SEED`: Generator seed (default: 42)
//! - `DASHBOARD_WINDOW_DAYS`: Trailing window length in days (default: 30)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dfw_flights::config::DashboardConfig;
use dfw_flights::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

    info!("Starting DFW Flights HTTP Server");

    // Invalid generator settings abort startup here.
    let config = DashboardConfig::load()?;
    info!(
        seed = config.generator.seed,
        window_days = config.generator.window_days,
        airlines = config.generator.airlines.len(),
        hub = %config.generator.hub_airline,
        "Configuration loaded"
    );

    let addr: SocketAddr = config.server.bind_address().parse()?;
    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

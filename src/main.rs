//! Employee pay API server.
//!
//! Usage: `employee-pay [CONFIG_PATH]`. The path falls back to
//! `EMPLOYEE_PAY_CONFIG`, then `./config/app.yaml`.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use employee_pay::api::{AppState, create_router};
use employee_pay::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use employee_pay::telemetry;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("EMPLOYEE_PAY_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = ConfigLoader::load(&config_path)?.into_config();
    telemetry::init_logging(&config.logging)?;

    info!(
        config_path = %config_path,
        seeded_employees = config.employees.len(),
        "Employee pay API v{} starting...",
        VERSION
    );

    let state = AppState::from_config(&config)?;
    let router = create_router(state);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!(address = %address, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

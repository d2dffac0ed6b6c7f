//! Attendance engine server binary.
//!
//! Loads the settings file (path from `CONFIG_PATH`, default
//! `./config/tracker.yaml`), binds the address from `BIND_ADDR` (default
//! `0.0.0.0:3000`), and serves the calculation API over HTTP.

use std::error::Error;

use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "./config/tracker.yaml".to_string());
    let config = ConfigLoader::load(&config_path)?;
    tracing::info!(
        config_path = %config_path,
        default_daily_wage = %config.default_daily_wage(),
        "Configuration loaded"
    );

    let state = AppState::new(config);
    let app = create_router(state);

    let address = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    tracing::info!("Listening on http://{address}");
    let listener = TcpListener::bind(&address).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

mod bus;
mod config;
mod device;
mod errors;
mod format;
mod readings;
mod registry;
mod scheduler;
mod sensors;

use crate::config::load_sensor_config;
use crate::registry::init_all;
use crate::scheduler::spawn_sensor_tasks;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // RUST_LOG=debug for verbose, RUST_LOG=info for normal, RUST_LOG=warn for production
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("[vl6180_hub] starting up...");

    // Load configuration from CONFIG_PATH or default
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string());
    let sensor_config_path = format!("{}/sensors.toml", config_path);
    let sensor_config = match load_sensor_config(&sensor_config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load sensor config: {}", e);
            std::process::exit(1);
        }
    };
    info!("[config] loaded {} sensor(s)", sensor_config.sensors.len());

    // Initialize sensors, each owning its bus handle
    let devices = match init_all(&sensor_config).await {
        Ok(devices) => devices,
        Err(e) => {
            error!("initialization failed: {}", e);
            std::process::exit(1);
        }
    };
    info!("[registry] sensors initialized");

    // Spawn polling tasks; readings stream to stdout as JSON lines
    spawn_sensor_tasks(devices, &sensor_config);
    info!("[main] sensor tasks launched");

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to wait for shutdown signal: {}", e);
    }
    info!("[main] shutting down");
}

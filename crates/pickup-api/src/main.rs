//! Archiver API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p pickup-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use pickup_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Initialize tracing, picking the preset from the environment when the
    // configuration is readable
    let tracing = match &config {
        Ok(config) => try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)),
        Err(_) => try_init_tracing(),
    };
    if let Err(e) = tracing {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        backend = config.backend.kind(),
        port = config.api.port,
        schedule = %config.sweep.schedule,
        "Configuration loaded"
    );

    if let Err(e) = pickup_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

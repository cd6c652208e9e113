//! Server setup and initialization
//!
//! Builds the backend handles from configuration, the Axum application, and
//! runs the server alongside the optional scheduler.

use std::sync::Arc;

use axum::Router;
use pickup_common::{AppConfig, AppError, AppResult, BackendConfig};
use pickup_db::{create_pool, PgCommunityRepository, PgGameRepository, PgHealthProbe};
use pickup_rest::{
    RestClient, RestClientConfig, RestCommunityRepository, RestGameRepository, RestHealthProbe,
};
use pickup_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::scheduler::SweepScheduler;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let service_context = create_service_context(&config).await?;
    Ok(AppState::new(service_context, config))
}

/// Wire repositories for the configured backend
async fn create_service_context(config: &AppConfig) -> AppResult<ServiceContext> {
    let builder = ServiceContextBuilder::new().schedule(config.sweep.schedule);

    let builder = match &config.backend {
        BackendConfig::Rest(rest) => {
            info!(url = %rest.url, "Using managed backend REST endpoint");
            let client_config = RestClientConfig::new(rest.url.as_str(), rest.service_key.as_str())
                .with_timeout(rest.timeout());
            let client =
                RestClient::new(&client_config).map_err(|e| AppError::Backend(e.to_string()))?;

            builder
                .community_repo(Arc::new(RestCommunityRepository::new(client.clone())))
                .game_repo(Arc::new(RestGameRepository::new(client.clone())))
                .health_probe(Arc::new(RestHealthProbe::new(client)))
        }
        BackendConfig::Postgres(database) => {
            info!("Connecting to PostgreSQL...");
            let pool = create_pool(database)
                .await
                .map_err(|e| AppError::Backend(e.to_string()))?;
            info!("PostgreSQL connection established");

            builder
                .community_repo(Arc::new(PgCommunityRepository::new(pool.clone())))
                .game_repo(Arc::new(PgGameRepository::new(pool.clone())))
                .health_probe(Arc::new(PgHealthProbe::new(pool)))
        }
    };

    builder.build().map_err(AppError::internal)
}

/// Run the HTTP server until ctrl-c
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;

    let scheduler = state
        .config()
        .sweep
        .interval()
        .map(|period| SweepScheduler::new(state.clone(), period).spawn());

    let app = create_app(state);
    let result = run_server(app, &addr).await;

    if let Some(handle) = scheduler {
        handle.abort();
    }
    result
}

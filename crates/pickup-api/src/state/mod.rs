//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! configuration and the lock that serializes sweeps in this process.

use std::sync::Arc;

use pickup_common::AppConfig;
use pickup_service::{ArchiveService, ServiceContext, ServiceResult, SweepOutcome};
use tokio::sync::Mutex;

/// Application state shared across all handlers and the scheduler
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Held for the duration of a sweep
    sweep_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            sweep_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run one sweep, waiting for any sweep already in flight to finish
    pub async fn run_sweep(&self) -> ServiceResult<SweepOutcome> {
        let _guard = self.sweep_lock.lock().await;
        ArchiveService::new(&self.service_context).sweep().await
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}

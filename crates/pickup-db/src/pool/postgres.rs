//! PostgreSQL connection pool for the direct backend

use pickup_common::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::debug;

/// How long a sweep waits for a free connection before failing
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle connections are closed after this long; sweeps are infrequent
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Pool options derived from the archiver's database settings
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    // A pool never holds fewer connections than it keeps warm
    let max_connections = config.max_connections.max(config.min_connections).max(1);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
}

/// Connect a pool and verify the database is reachable
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = pool_options(config);
    debug!(
        max_connections = options.get_max_connections(),
        min_connections = options.get_min_connections(),
        "Opening PostgreSQL pool"
    );
    options.connect(&config.url).await
}

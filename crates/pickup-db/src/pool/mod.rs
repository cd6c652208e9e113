//! Database connection pool management

mod postgres;

pub use postgres::{create_pool, pool_options, ACQUIRE_TIMEOUT, IDLE_TIMEOUT};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;

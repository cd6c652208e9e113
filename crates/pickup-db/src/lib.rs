//! # pickup-db
//!
//! Database layer implementing the archiver's repository traits with
//! PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `pickup-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pickup_common::DatabaseConfig;
//! use pickup_core::CommunityRepository;
//! use pickup_db::{create_pool, PgCommunityRepository};
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     let communities = PgCommunityRepository::new(pool);
//!
//!     let candidates = communities.find_unarchived_with_game().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool};
pub use repositories::{PgCommunityRepository, PgGameRepository, PgHealthProbe};

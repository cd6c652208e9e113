//! # pickup-rest
//!
//! Repository implementations that talk to the managed backend through its
//! PostgREST endpoint (`{url}/rest/v1/{table}`) using a service-role key.
//!
//! Only the query surface the archiver needs is modelled: column projection,
//! `eq`, `not.is.null` and `in.(…)` filters, `limit`, and a filtered `PATCH`
//! that returns the changed rows.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pickup_rest::{RestClient, RestClientConfig, RestCommunityRepository};
//!
//! let client = RestClient::new(&RestClientConfig::new(url, service_key))?;
//! let communities = RestCommunityRepository::new(client);
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod repositories;

pub use client::{RestClient, RestClientConfig};
pub use error::RestError;
pub use query::{Filter, TableQuery};
pub use repositories::{
    RestCommunityRepository, RestGameRepository, RestHealthProbe, ARCHIVE_CHUNK_SIZE,
};

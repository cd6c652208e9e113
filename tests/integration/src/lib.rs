//! Integration test utilities for the archiver
//!
//! Helpers for running end-to-end tests against the HTTP surface, backed
//! either by the in-memory backend or by a mock of the managed backend.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

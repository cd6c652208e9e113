//! Route handlers

pub mod archive;
pub mod health;

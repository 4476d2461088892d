//! holonet library
//!
//! Exposes the API client, cache, formatter, orchestrator, and demo server for
//! the binary and for integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod display;
pub mod logging;
pub mod orchestrator;
pub mod server;
pub mod stats;

//! `pitwall-aggregator` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod config;
pub mod oplog;
pub mod pipeline;
pub mod runner;
pub mod snapshot;
pub mod tail;

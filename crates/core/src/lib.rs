//! `pitwall-core` — domain logic for the telemetry aggregator.
//!
//! Pure types and functions: reading extraction, severity
//! classification, the consolidated telemetry state, and alert
//! rendering. No file I/O and no async — the aggregator binary wires
//! these into its poll pipeline and owns all side effects.

pub mod alert;
pub mod classify;
pub mod extract;
pub mod state;
pub mod types;

//! Aggregator configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

/// Default seconds between poll cycles.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

/// Runtime configuration for the aggregator daemon.
///
/// All fields have defaults suitable for a local run next to the
/// simulator; override via environment variables for other layouts.
#[derive(Debug, Clone)]
pub struct Config {
    /// Engine producer log, tailed for `Temp:` lines.
    pub engine_log: PathBuf,
    /// Tire producer log, tailed for `TIRE (...)` lines.
    pub tire_log: PathBuf,
    /// Brake producer log, tailed for `BRAKE (...)` lines.
    pub brake_log: PathBuf,
    /// Snapshot artifact consumed by the dashboard, overwritten each cycle.
    pub state_path: PathBuf,
    /// Append-only operational log (raw lines + alerts).
    pub ops_log: PathBuf,
    /// Delay between poll cycles.
    pub poll_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                       |
    /// |----------------------|-------------------------------|
    /// | `ENGINE_LOG`         | `./logs/engine.log`           |
    /// | `TIRE_LOG`           | `./logs/tire.log`             |
    /// | `BRAKE_LOG`          | `./logs/brake.log`            |
    /// | `STATE_FILE`         | `./logs/telemetry_state.json` |
    /// | `AGGREGATOR_LOG`     | `./logs/aggregator.log`       |
    /// | `POLL_INTERVAL_SECS` | `3`                           |
    pub fn from_env() -> Self {
        let engine_log =
            PathBuf::from(std::env::var("ENGINE_LOG").unwrap_or_else(|_| "./logs/engine.log".into()));
        let tire_log =
            PathBuf::from(std::env::var("TIRE_LOG").unwrap_or_else(|_| "./logs/tire.log".into()));
        let brake_log =
            PathBuf::from(std::env::var("BRAKE_LOG").unwrap_or_else(|_| "./logs/brake.log".into()));
        let state_path = PathBuf::from(
            std::env::var("STATE_FILE").unwrap_or_else(|_| "./logs/telemetry_state.json".into()),
        );
        let ops_log = PathBuf::from(
            std::env::var("AGGREGATOR_LOG").unwrap_or_else(|_| "./logs/aggregator.log".into()),
        );

        let poll_interval_secs: u64 = std::env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        Self {
            engine_log,
            tire_log,
            brake_log,
            state_path,
            ops_log,
            poll_interval: Duration::from_secs(poll_interval_secs),
        }
    }
}

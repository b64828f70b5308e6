//! `pitwall-aggregator` -- telemetry ingestion daemon.
//!
//! Tails the engine/tire/brake producer logs, extracts structured
//! readings, classifies them against fixed thresholds, keeps a
//! consolidated latest-value state, and persists it as a JSON snapshot
//! for the dashboard after every cycle. Red readings additionally land
//! in the operational log as alerts.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default                       | Description                    |
//! |----------------------|----------|-------------------------------|--------------------------------|
//! | `ENGINE_LOG`         | no       | `./logs/engine.log`           | Engine producer log            |
//! | `TIRE_LOG`           | no       | `./logs/tire.log`             | Tire producer log              |
//! | `BRAKE_LOG`          | no       | `./logs/brake.log`            | Brake producer log             |
//! | `STATE_FILE`         | no       | `./logs/telemetry_state.json` | Snapshot artifact              |
//! | `AGGREGATOR_LOG`     | no       | `./logs/aggregator.log`       | Operational log                |
//! | `POLL_INTERVAL_SECS` | no       | `3`                           | Seconds between poll cycles    |

use pitwall_aggregator::config::Config;
use pitwall_aggregator::pipeline::Aggregator;
use pitwall_aggregator::runner;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitwall_aggregator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // The artifact directory must exist before the first cycle writes
    // the snapshot and operational log.
    for artifact in [&config.state_path, &config.ops_log] {
        if let Some(dir) = artifact.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::error!(error = %e, dir = %dir.display(), "Cannot create artifact directory");
                std::process::exit(1);
            }
        }
    }

    tracing::info!(
        engine_log = %config.engine_log.display(),
        tire_log = %config.tire_log.display(),
        brake_log = %config.brake_log.display(),
        state_path = %config.state_path.display(),
        interval_secs = config.poll_interval.as_secs(),
        "Starting pitwall-aggregator",
    );

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl-C received, shutting down");
                cancel.cancel();
            }
        });
    }

    let aggregator = Aggregator::new(&config);
    runner::run(aggregator, config.poll_interval, cancel).await;
}

//! The poll scheduler: drive cycles on a fixed interval until cancelled.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::pipeline::Aggregator;

/// Run the aggregator loop until `cancel` is triggered.
///
/// The interval tick is the only suspension point; each cycle runs to
/// completion regardless of per-cycle errors, so the loop always makes
/// forward progress. The first cycle fires immediately on startup.
pub async fn run(mut aggregator: Aggregator, interval: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = interval.as_secs(), "Aggregator loop started");

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Aggregator loop stopping");
                break;
            }
            _ = ticker.tick() => {
                let alerts = aggregator.run_cycle();
                if alerts.is_empty() {
                    tracing::debug!("Cycle complete, all systems normal");
                } else {
                    for alert in &alerts {
                        tracing::warn!(%alert, "Threshold breach");
                    }
                }
            }
        }
    }
}

//! `pitwall-simulator` -- synthetic telemetry producer.
//!
//! Dev/demo stand-in for the real engine, tire, and brake subsystems:
//! appends plausible telemetry lines to the three producer logs on a
//! fixed tick so the aggregator has something to ingest locally.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default             | Description               |
//! |----------------------|----------|---------------------|---------------------------|
//! | `ENGINE_LOG`         | no       | `./logs/engine.log` | Engine log to append to   |
//! | `TIRE_LOG`           | no       | `./logs/tire.log`   | Tire log to append to     |
//! | `BRAKE_LOG`          | no       | `./logs/brake.log`  | Brake log to append to    |
//! | `TICK_INTERVAL_SECS` | no       | `5`                 | Seconds between ticks     |

mod process;

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pitwall_core::types::Position;

use crate::process::{OrnsteinUhlenbeck, SineWave};

/// Default seconds between producer ticks.
const DEFAULT_TICK_SECS: u64 = 5;

/// Timestamp prefix on every emitted line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Signal models for all three subsystems.
struct Producers {
    engine_temp: SineWave,
    engine_rpm: SineWave,
    tire_psi: BTreeMap<Position, OrnsteinUhlenbeck>,
    tire_wear: SineWave,
    brake_temp: BTreeMap<Position, OrnsteinUhlenbeck>,
    brake_slip: SineWave,
    tick: u64,
}

impl Producers {
    fn new() -> Self {
        Self {
            // Engine temperature swings 90-110 °C, RPM 4500-7500.
            engine_temp: SineWave {
                base: 100.0,
                amplitude: 10.0,
                rate: 0.05,
                jitter: 1.0,
            },
            engine_rpm: SineWave {
                base: 6000.0,
                amplitude: 1500.0,
                rate: 0.1,
                jitter: 100.0,
            },
            tire_psi: Position::ALL
                .into_iter()
                .map(|p| (p, OrnsteinUhlenbeck::new(30.0, 30.0, 0.1, 1.0)))
                .collect(),
            // Wear cycles between roughly 10-30 %.
            tire_wear: SineWave {
                base: 20.0,
                amplitude: 10.0,
                rate: 0.03,
                jitter: 1.0,
            },
            brake_temp: Position::ALL
                .into_iter()
                .map(|p| (p, OrnsteinUhlenbeck::new(300.0, 350.0, 0.1, 10.0)))
                .collect(),
            // Slip cycles between roughly 3-7 %.
            brake_slip: SineWave {
                base: 5.0,
                amplitude: 2.0,
                rate: 0.05,
                jitter: 0.5,
            },
            tick: 0,
        }
    }

    fn engine_line<R: rand::Rng>(&mut self, rng: &mut R) -> String {
        let temp = self.engine_temp.sample(self.tick, rng);
        let rpm = self.engine_rpm.sample(self.tick, rng).round() as i64;
        format!("ENGINE | Temp: {temp:.2} | RPM: {rpm}")
    }

    fn tire_lines<R: rand::Rng>(&mut self, rng: &mut R) -> Vec<String> {
        let wear = self.tire_wear.sample(self.tick, rng);
        self.tire_psi
            .iter_mut()
            .map(|(position, psi)| {
                let psi = psi.step(rng);
                format!("TIRE ({position}) | PSI: {psi:.2} | Wear: {wear:.2}%")
            })
            .collect()
    }

    fn brake_lines<R: rand::Rng>(&mut self, rng: &mut R) -> Vec<String> {
        let slip = self.brake_slip.sample(self.tick, rng);
        self.brake_temp
            .iter_mut()
            .map(|(position, temp)| {
                let temp = temp.step(rng);
                format!("BRAKE ({position}) | Temp: {temp:.2}°C | Slip: {slip:.2}%")
            })
            .collect()
    }

    fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Append timestamped lines to one producer log.
fn append_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for line in lines {
        writeln!(file, "{} {}", Utc::now().format(TIMESTAMP_FORMAT), line)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitwall_simulator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let engine_log =
        PathBuf::from(std::env::var("ENGINE_LOG").unwrap_or_else(|_| "./logs/engine.log".into()));
    let tire_log =
        PathBuf::from(std::env::var("TIRE_LOG").unwrap_or_else(|_| "./logs/tire.log".into()));
    let brake_log =
        PathBuf::from(std::env::var("BRAKE_LOG").unwrap_or_else(|_| "./logs/brake.log".into()));

    let tick_secs: u64 = std::env::var("TICK_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TICK_SECS);

    for log in [&engine_log, &tire_log, &brake_log] {
        if let Some(dir) = log.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::error!(error = %e, dir = %dir.display(), "Cannot create log directory");
                std::process::exit(1);
            }
        }
    }

    tracing::info!(
        engine_log = %engine_log.display(),
        tire_log = %tire_log.display(),
        brake_log = %brake_log.display(),
        tick_secs,
        "Starting pitwall-simulator",
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

    let mut producers = Producers::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(tick_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Simulator stopping");
                break;
            }
            _ = ticker.tick() => {
                let mut rng = rand::rng();
                let engine = vec![producers.engine_line(&mut rng)];
                let tires = producers.tire_lines(&mut rng);
                let brakes = producers.brake_lines(&mut rng);
                producers.advance();

                for (path, lines) in [(&engine_log, &engine), (&tire_log, &tires), (&brake_log, &brakes)] {
                    if let Err(e) = append_lines(path, lines) {
                        tracing::error!(error = %e, path = %path.display(), "Failed to append telemetry lines");
                    }
                }
                tracing::debug!(tick = producers.tick, "Telemetry tick emitted");
            }
        }
    }
}

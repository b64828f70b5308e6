//! One poll cycle: read → extract → classify → update → alert → persist.

use std::path::PathBuf;

use pitwall_core::state::TelemetryState;
use pitwall_core::types::{SourceKind, Status};
use pitwall_core::{alert, classify, extract};

use crate::config::Config;
use crate::oplog::OpsLog;
use crate::snapshot;
use crate::tail::LogTailer;

/// Entry written to the operational log on alert-free cycles.
const ALL_CLEAR: &str = "✅ All systems normal.";

/// The ingestion pipeline: three tailers feeding one state store.
///
/// `run_cycle` never fails — every error class (missing source,
/// malformed line, snapshot write failure) is absorbed within the
/// cycle so the loop always makes forward progress.
pub struct Aggregator {
    engine: LogTailer,
    tire: LogTailer,
    brake: LogTailer,
    state: TelemetryState,
    ops: OpsLog,
    state_path: PathBuf,
}

impl Aggregator {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: LogTailer::new(&config.engine_log),
            tire: LogTailer::new(&config.tire_log),
            brake: LogTailer::new(&config.brake_log),
            state: TelemetryState::new(),
            ops: OpsLog::new(&config.ops_log),
            state_path: config.state_path.clone(),
        }
    }

    /// Current consolidated state.
    pub fn state(&self) -> &TelemetryState {
        &self.state
    }

    /// Run one full poll cycle and return the alerts it raised.
    ///
    /// A source that cannot be read is skipped for this cycle and the
    /// others still proceed; malformed lines are dropped silently; a
    /// snapshot write failure is logged and retried next cycle.
    pub fn run_cycle(&mut self) -> Vec<String> {
        let mut alerts = Vec::new();

        let sources = [
            (SourceKind::Engine, &mut self.engine),
            (SourceKind::Tire, &mut self.tire),
            (SourceKind::Brake, &mut self.brake),
        ];

        for (kind, tailer) in sources {
            let lines = match tailer.read_new() {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!(source = %kind, error = %e, "Failed to read source log; skipping this cycle");
                    continue;
                }
            };

            for line in &lines {
                if let Err(e) = self.ops.append(line) {
                    tracing::error!(error = %e, "Failed to append raw line to operational log");
                }

                let Some(reading) = extract::extract(kind, line) else {
                    continue; // not a telemetry line for this source
                };

                let status = classify::classify(&reading);
                self.state.apply(&reading, status);

                if status == Status::Red {
                    alerts.push(alert::render(&reading));
                }
            }
        }

        let ops_result = if alerts.is_empty() {
            self.ops.append(ALL_CLEAR)
        } else {
            alerts.iter().try_for_each(|a| self.ops.append(a))
        };
        if let Err(e) = ops_result {
            tracing::error!(error = %e, "Failed to append to operational log");
        }

        if let Err(e) = snapshot::write(&self.state_path, &self.state.snapshot()) {
            tracing::error!(
                error = %e,
                path = %self.state_path.display(),
                "Failed to persist telemetry snapshot; retrying next cycle"
            );
        }

        alerts
    }
}

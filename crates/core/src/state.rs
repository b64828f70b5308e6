//! Consolidated latest-value telemetry state.
//!
//! Every monitored key exists from construction with an `Unknown`
//! status and no value, and is only ever overwritten — value and
//! status together — by the pipeline. Nothing is removed for the life
//! of the process. The struct serializes directly as the snapshot
//! document consumed by the dashboard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Position, Reading, Status};

/// Latest engine reading and its severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineEntry {
    pub temp: Option<f64>,
    pub status: Status,
}

/// Latest tire pressure for one corner and its severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TireEntry {
    pub psi: Option<f64>,
    pub status: Status,
}

/// Latest brake temperature for one corner and its severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrakeEntry {
    pub temp: Option<f64>,
    pub status: Status,
}

/// Latest reading + severity per monitored entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryState {
    pub engine: EngineEntry,
    pub tires: BTreeMap<Position, TireEntry>,
    pub brakes: BTreeMap<Position, BrakeEntry>,
}

impl TelemetryState {
    /// Fresh state: every key present, `Unknown` status, no value.
    pub fn new() -> Self {
        Self {
            engine: EngineEntry {
                temp: None,
                status: Status::Unknown,
            },
            tires: Position::ALL
                .into_iter()
                .map(|position| {
                    (
                        position,
                        TireEntry {
                            psi: None,
                            status: Status::Unknown,
                        },
                    )
                })
                .collect(),
            brakes: Position::ALL
                .into_iter()
                .map(|position| {
                    (
                        position,
                        BrakeEntry {
                            temp: None,
                            status: Status::Unknown,
                        },
                    )
                })
                .collect(),
        }
    }

    /// Overwrite the entry for the reading's key, value and status
    /// written together so no observer can pair a new value with a
    /// stale status.
    pub fn apply(&mut self, reading: &Reading, status: Status) {
        match reading {
            Reading::EngineTemp { temp } => {
                self.engine = EngineEntry {
                    temp: Some(*temp),
                    status,
                };
            }
            Reading::TirePressure { position, psi } => {
                self.tires.insert(
                    *position,
                    TireEntry {
                        psi: Some(*psi),
                        status,
                    },
                );
            }
            Reading::BrakeTemp { position, temp } => {
                self.brakes.insert(
                    *position,
                    BrakeEntry {
                        temp: Some(*temp),
                        status,
                    },
                );
            }
        }
    }

    /// Immutable copy for serialization, decoupled from further updates.
    pub fn snapshot(&self) -> TelemetryState {
        self.clone()
    }
}

impl Default for TelemetryState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

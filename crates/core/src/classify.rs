//! Severity classification of readings against fixed thresholds.
//!
//! Pure logic — no I/O. One parameterized evaluator covers all three
//! reading kinds, which differ only in their band values and in
//! whether the failure mode is a high value (overheat) or a low one
//! (pressure loss).

use crate::types::{Reading, Status};

/// Which side of the bands is dangerous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Red when the value exceeds the critical bound (temperatures).
    HighIsBad,
    /// Red when the value drops below the critical bound (pressure).
    LowIsBad,
}

/// Warning/critical band pair for one reading kind.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
    pub direction: Direction,
}

/// Engine temperature bands (°C): Red above 120, Yellow above 115.
pub const ENGINE_TEMP: Thresholds = Thresholds {
    warning: 115.0,
    critical: 120.0,
    direction: Direction::HighIsBad,
};

/// Tire pressure bands (PSI): Red below 24, Yellow below 26.
pub const TIRE_PSI: Thresholds = Thresholds {
    warning: 26.0,
    critical: 24.0,
    direction: Direction::LowIsBad,
};

/// Brake temperature bands (°C): Red above 420, Yellow above 400.
pub const BRAKE_TEMP: Thresholds = Thresholds {
    warning: 400.0,
    critical: 420.0,
    direction: Direction::HighIsBad,
};

/// Classify a value against a band pair.
///
/// The Red bound is strict (`>` or `<`), the Yellow band is the
/// half-open interval adjacent to it, and everything else is Green —
/// the three tiers partition the real line with no gaps or overlaps.
pub fn classify_value(value: f64, thresholds: &Thresholds) -> Status {
    match thresholds.direction {
        Direction::HighIsBad => {
            if value > thresholds.critical {
                Status::Red
            } else if value > thresholds.warning {
                Status::Yellow
            } else {
                Status::Green
            }
        }
        Direction::LowIsBad => {
            if value < thresholds.critical {
                Status::Red
            } else if value < thresholds.warning {
                Status::Yellow
            } else {
                Status::Green
            }
        }
    }
}

/// Classify a reading with its kind's fixed thresholds.
pub fn classify(reading: &Reading) -> Status {
    match reading {
        Reading::EngineTemp { temp } => classify_value(*temp, &ENGINE_TEMP),
        Reading::TirePressure { psi, .. } => classify_value(*psi, &TIRE_PSI),
        Reading::BrakeTemp { temp, .. } => classify_value(*temp, &BRAKE_TEMP),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Line extractors: raw producer log lines → typed readings.
//!
//! One pattern per source kind, compiled once. Anything that does not
//! fit — wrong shape, unknown corner, unparsable number — yields
//! `None`; a garbled line never aborts the surrounding batch.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Position, Reading, SourceKind};

/// `... Temp: <float> ...` (other fields such as RPM are ignored).
static ENGINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Temp: ([\d.]+)").expect("valid regex"));

/// `... TIRE (<corner>) | PSI: <float> ...`
static TIRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TIRE \((.*?)\) \| PSI: ([\d.]+)").expect("valid regex"));

/// `... BRAKE (<corner>) | Temp: <float> ...`
static BRAKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"BRAKE \((.*?)\) \| Temp: ([\d.]+)").expect("valid regex"));

/// Extract a reading from one line of the given source's log.
pub fn extract(kind: SourceKind, line: &str) -> Option<Reading> {
    match kind {
        SourceKind::Engine => engine(line),
        SourceKind::Tire => tire(line),
        SourceKind::Brake => brake(line),
    }
}

/// Extract an engine temperature reading.
pub fn engine(line: &str) -> Option<Reading> {
    let caps = ENGINE_RE.captures(line)?;
    let temp = caps[1].parse().ok()?;
    Some(Reading::EngineTemp { temp })
}

/// Extract a tire pressure reading for one corner.
pub fn tire(line: &str) -> Option<Reading> {
    let caps = TIRE_RE.captures(line)?;
    let position = Position::parse(&caps[1])?;
    let psi = caps[2].parse().ok()?;
    Some(Reading::TirePressure { position, psi })
}

/// Extract a brake temperature reading for one corner.
pub fn brake(line: &str) -> Option<Reading> {
    let caps = BRAKE_RE.captures(line)?;
    let position = Position::parse(&caps[1])?;
    let temp = caps[2].parse().ok()?;
    Some(Reading::BrakeTemp { position, temp })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Shared telemetry domain types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three telemetry-producing subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Engine,
    Tire,
    Brake,
}

impl SourceKind {
    /// All source kinds, in pipeline processing order.
    pub const ALL: [SourceKind; 3] = [SourceKind::Engine, SourceKind::Tire, SourceKind::Brake];
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Engine => "engine",
            SourceKind::Tire => "tire",
            SourceKind::Brake => "brake",
        };
        f.write_str(name)
    }
}

/// Vehicle corner identifier for tires and brakes.
///
/// Serializes as the hyphenated form used in both the producer log
/// lines and the snapshot document (`Front-Left`, `Rear-Right`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Front-Left")]
    FrontLeft,
    #[serde(rename = "Front-Right")]
    FrontRight,
    #[serde(rename = "Rear-Left")]
    RearLeft,
    #[serde(rename = "Rear-Right")]
    RearRight,
}

impl Position {
    /// All four corners, in front-to-rear, left-to-right order.
    pub const ALL: [Position; 4] = [
        Position::FrontLeft,
        Position::FrontRight,
        Position::RearLeft,
        Position::RearRight,
    ];

    /// The hyphenated wire form of this corner.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::FrontLeft => "Front-Left",
            Position::FrontRight => "Front-Right",
            Position::RearLeft => "Rear-Left",
            Position::RearRight => "Rear-Right",
        }
    }

    /// Parse the hyphenated wire form. Anything else is not a corner.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Front-Left" => Some(Position::FrontLeft),
            "Front-Right" => Some(Position::FrontRight),
            "Rear-Left" => Some(Position::RearLeft),
            "Rear-Right" => Some(Position::RearRight),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier of a reading.
///
/// `Unknown` holds only before the first successful parse for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Unknown,
    Green,
    Yellow,
    Red,
}

/// A structured reading extracted from one raw producer log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Engine temperature in °C.
    EngineTemp { temp: f64 },
    /// Tire pressure in PSI for one corner.
    TirePressure { position: Position, psi: f64 },
    /// Brake temperature in °C for one corner.
    BrakeTemp { position: Position, temp: f64 },
}

//! Snapshot artifact persistence.
//!
//! Serializes the consolidated telemetry state wholesale after every
//! cycle. The document is staged next to its destination and renamed
//! into place, so a concurrent dashboard read never observes a
//! partially written file.

use std::fs;
use std::path::{Path, PathBuf};

use pitwall_core::state::TelemetryState;

/// Failure to persist the snapshot artifact.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to serialize telemetry state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Atomically replace the snapshot at `path` with the given state.
pub fn write(path: &Path, state: &TelemetryState) -> Result<(), SnapshotError> {
    let json = serde_json::to_vec_pretty(state)?;

    // Stage in the destination directory so the rename cannot cross
    // filesystems.
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Append-only operational log.
//!
//! One timestamped entry per line: every raw input line the pipeline
//! consumed, every alert it raised, and an all-clear marker for quiet
//! cycles. The dashboard's log viewer tails this file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;

/// Timestamp layout matching the producer logs.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Writer for the operational log.
#[derive(Debug)]
pub struct OpsLog {
    path: PathBuf,
}

impl OpsLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one timestamped entry.
    ///
    /// The file is opened per call, so an external rotation of the
    /// operational log is picked up cleanly on the next entry.
    pub fn append(&self, entry: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} {}", Utc::now().format(TIMESTAMP_FORMAT), entry)
    }
}

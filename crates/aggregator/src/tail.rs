//! Incremental reader over an append-only producer log.
//!
//! Each tailer owns a byte cursor into one file and returns only the
//! complete lines appended since the previous poll. The cursor never
//! rewinds: rotation or truncation of a producer log below the cursor
//! is a known gap — it is reported, never recovered from.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Per-source byte cursor over an append-only log file.
#[derive(Debug)]
pub struct LogTailer {
    path: PathBuf,
    cursor: u64,
}

impl LogTailer {
    /// Start tailing `path` from the beginning of the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cursor: 0,
        }
    }

    /// Path of the tailed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte offset of the first unconsumed byte.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Return the complete lines appended since the previous poll.
    ///
    /// A missing file means the producer has not started writing yet
    /// and yields no lines. Only bytes up to the file length observed
    /// at poll time are read, and the cursor advances past the last
    /// newline only — a trailing half-written line stays unconsumed
    /// until a later poll completes it.
    pub fn read_new(&mut self) -> io::Result<Vec<String>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let len = file.metadata()?.len();
        if len < self.cursor {
            tracing::warn!(
                path = %self.path.display(),
                cursor = self.cursor,
                len,
                "Source log shrank below cursor; ignoring it until it grows back"
            );
            return Ok(Vec::new());
        }
        if len == self.cursor {
            return Ok(Vec::new());
        }

        file.seek(SeekFrom::Start(self.cursor))?;
        let mut buf = Vec::with_capacity((len - self.cursor) as usize);
        file.take(len - self.cursor).read_to_end(&mut buf)?;

        // Consume up to and including the last newline.
        let consumed = match buf.iter().rposition(|&b| b == b'\n') {
            Some(idx) => idx + 1,
            None => return Ok(Vec::new()),
        };
        self.cursor += consumed as u64;

        let lines = buf[..consumed]
            .split(|&b| b == b'\n')
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                String::from_utf8_lossy(raw).into_owned()
            })
            .collect();

        Ok(lines)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

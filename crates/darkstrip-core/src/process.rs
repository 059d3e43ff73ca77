//! Per-file processing: read, strip, conditionally rewrite

use darkstrip_fs::{NormalizedPath, io};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{Result, TokenStripper};

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Tokens were removed and the file was rewritten (or would be, in a dry run)
    Processed { removed: usize },
    /// No marker tokens found; the file was not touched
    Unchanged,
    /// Reading, decoding or writing failed; the file was not counted
    Failed { error: String },
}

/// Applies a [`TokenStripper`] to files on disk.
#[derive(Debug, Clone)]
pub struct FileProcessor {
    stripper: TokenStripper,
    dry_run: bool,
}

impl FileProcessor {
    pub fn new(stripper: TokenStripper, dry_run: bool) -> Self {
        Self { stripper, dry_run }
    }

    /// Process one file. Failures are captured in the outcome, never raised.
    pub fn process(&self, path: &NormalizedPath) -> FileOutcome {
        match self.try_process(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(path = %path, error = %err, "failed to process file");
                FileOutcome::Failed {
                    error: err.to_string(),
                }
            }
        }
    }

    fn try_process(&self, path: &NormalizedPath) -> Result<FileOutcome> {
        let content = io::read_text(path)?;
        let (stripped, removed) = self.stripper.strip_with_count(&content);

        if stripped == content.as_str() {
            debug!(path = %path, "no marker tokens");
            return Ok(FileOutcome::Unchanged);
        }

        if self.dry_run {
            debug!(path = %path, removed, "dry run, leaving file as is");
        } else {
            io::write_text(path, &stripped)?;
            debug!(path = %path, removed, "rewrote file");
        }

        Ok(FileOutcome::Processed { removed })
    }
}

//! Batch outcome bookkeeping

use std::fmt;

use darkstrip_fs::NormalizedPath;
use serde::Serialize;

use crate::FileOutcome;

/// Outcome of one file within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: NormalizedPath,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Counters over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub processed: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub total: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} files out of {} total files.",
            self.processed, self.total
        )
    }
}

/// All file outcomes of a batch, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    dry_run: bool,
    files: Vec<FileEntry>,
    summary: Summary,
}

impl BatchReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn record(&mut self, entry: FileEntry) {
        match entry.outcome {
            FileOutcome::Processed { .. } => self.summary.processed += 1,
            FileOutcome::Unchanged => self.summary.unchanged += 1,
            FileOutcome::Failed { .. } => self.summary.failed += 1,
        }
        self.summary.total += 1;
        self.files.push(entry);
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Entries that failed, for callers that want to surface them again.
    pub fn failures(&self) -> impl Iterator<Item = &FileEntry> {
        self.files
            .iter()
            .filter(|entry| matches!(entry.outcome, FileOutcome::Failed { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, outcome: FileOutcome) -> FileEntry {
        FileEntry {
            path: NormalizedPath::new(path),
            outcome,
        }
    }

    #[test]
    fn test_record_updates_summary() {
        let mut report = BatchReport::new(false);
        report.record(entry("src/a.tsx", FileOutcome::Processed { removed: 3 }));
        report.record(entry("src/b.tsx", FileOutcome::Unchanged));
        report.record(entry(
            "src/c.tsx",
            FileOutcome::Failed {
                error: "boom".into(),
            },
        ));

        let summary = report.summary();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_summary_line() {
        let summary = Summary {
            processed: 2,
            unchanged: 5,
            failed: 0,
            total: 7,
        };
        assert_eq!(
            summary.to_string(),
            "Processed 2 files out of 7 total files."
        );
    }

    #[test]
    fn test_empty_report_summary_line() {
        let report = BatchReport::new(false);
        assert_eq!(
            report.summary().to_string(),
            "Processed 0 files out of 0 total files."
        );
    }
}

//! Console rendering of batch progress

use std::io::{self, Write};

use colored::Colorize;
use darkstrip_core::{BatchReport, FileEntry, FileOutcome, Reporter};

/// Writes one line per file as the batch advances, then the summary.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
    dry_run: bool,
}

impl ConsoleReporter<io::StdoutLock<'static>> {
    pub fn stdout(dry_run: bool) -> Self {
        Self::new(io::stdout().lock(), dry_run)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, dry_run: bool) -> Self {
        Self { out, dry_run }
    }

    /// Blank line, then the modified/total summary.
    pub fn finish(&mut self, report: &BatchReport) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", report.summary())?;
        self.out.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn file_done(&mut self, entry: &FileEntry) -> io::Result<()> {
        writeln!(self.out, "{}", file_line(entry, self.dry_run))
    }
}

/// The console line for one file.
pub fn file_line(entry: &FileEntry, dry_run: bool) -> String {
    match &entry.outcome {
        FileOutcome::Processed { .. } if dry_run => {
            format!("{} {}", "Would process:".yellow(), entry.path)
        }
        FileOutcome::Processed { .. } => format!("{} {}", "Processed:".green(), entry.path),
        FileOutcome::Unchanged => format!("{} {}", "No changes:".dimmed(), entry.path),
        FileOutcome::Failed { error } => {
            format!("{} {}: {}", "Error processing".red(), entry.path, error)
        }
    }
}

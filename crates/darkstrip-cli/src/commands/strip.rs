//! The strip command: enumerate, strip, rewrite, report

use std::io::Write;

use darkstrip_core::{Batch, BatchReport, StripConfig};

use crate::error::Result;
use crate::output::ConsoleReporter;

/// How the batch outcome is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per file and a summary line
    Text,
    /// The whole report as pretty JSON once the batch is done
    Json,
}

/// Run one batch with `config`, printing progress in `format`.
///
/// Per-file failures are part of the returned report; only invalid
/// configuration or a closed stdout is an error here.
pub fn run_strip(config: StripConfig, format: OutputFormat) -> Result<BatchReport> {
    let batch = Batch::new(config)?;

    match format {
        OutputFormat::Text => {
            let mut reporter = ConsoleReporter::stdout(batch.config().dry_run);
            let report = batch.run(&mut reporter)?;
            reporter.finish(&report)?;
            Ok(report)
        }
        OutputFormat::Json => {
            let report = batch.run(&mut ())?;
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
            Ok(report)
        }
    }
}

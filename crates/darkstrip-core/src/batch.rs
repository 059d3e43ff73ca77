//! Sequential batch driver

use std::io;

use darkstrip_fs::{NormalizedPath, find_files};
use tracing::debug;

use crate::{BatchReport, Error, FileEntry, FileProcessor, Result, StripConfig};

/// Receives each file's outcome as soon as it is known.
///
/// An error from the reporter (for example a closed stdout) stops the batch.
pub trait Reporter {
    fn file_done(&mut self, entry: &FileEntry) -> io::Result<()>;
}

/// Discards outcomes.
impl Reporter for () {
    fn file_done(&mut self, _entry: &FileEntry) -> io::Result<()> {
        Ok(())
    }
}

/// Collects outcomes in order.
impl Reporter for Vec<FileEntry> {
    fn file_done(&mut self, entry: &FileEntry) -> io::Result<()> {
        self.push(entry.clone());
        Ok(())
    }
}

/// One enumerate-and-strip pass over a source tree.
#[derive(Debug, Clone)]
pub struct Batch {
    config: StripConfig,
    processor: FileProcessor,
}

impl Batch {
    /// Validate `config` and prepare the processor.
    pub fn new(config: StripConfig) -> Result<Self> {
        let stripper = config.stripper()?;
        let processor = FileProcessor::new(stripper, config.dry_run);
        Ok(Self { config, processor })
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Files this batch would visit, in traversal order.
    pub fn files(&self) -> Vec<NormalizedPath> {
        find_files(&self.config.root, &self.config.extension)
    }

    /// Process every file in turn. A failing file never stops the batch;
    /// only a failing reporter does.
    pub fn run<R: Reporter + ?Sized>(&self, reporter: &mut R) -> Result<BatchReport> {
        let files = self.files();
        debug!(
            root = %self.config.root,
            extension = %self.config.extension,
            count = files.len(),
            dry_run = self.config.dry_run,
            "starting batch"
        );

        let mut report = BatchReport::new(self.config.dry_run);
        for path in files {
            let outcome = self.processor.process(&path);
            let entry = FileEntry { path, outcome };
            reporter.file_done(&entry).map_err(Error::Report)?;
            report.record(entry);
        }

        let summary = report.summary();
        debug!(
            processed = summary.processed,
            unchanged = summary.unchanged,
            failed = summary.failed,
            "batch finished"
        );
        Ok(report)
    }
}

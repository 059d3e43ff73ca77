//! Run configuration

use darkstrip_fs::NormalizedPath;

use crate::strip::DEFAULT_PREFIX;
use crate::{Error, Result, TokenStripper};

/// Directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = "src";

/// File extension processed when none is given.
pub const DEFAULT_EXTENSION: &str = "tsx";

/// Settings for one batch run.
///
/// `StripConfig::default()` scans `src` for `.tsx` files and strips
/// `dark:` tokens, writing changes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    pub root: NormalizedPath,
    /// Extension without the leading dot
    pub extension: String,
    pub prefix: String,
    /// Compute outcomes without writing any file
    pub dry_run: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            root: NormalizedPath::new(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            dry_run: false,
        }
    }
}

impl StripConfig {
    pub fn with_root(mut self, root: impl Into<NormalizedPath>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the extension. A leading `.` is dropped.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check the settings and build the stripper they describe.
    pub fn stripper(&self) -> Result<TokenStripper> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(Error::EmptyExtension);
        }
        TokenStripper::new(&self.prefix)
    }
}

//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use darkstrip_core::StripConfig;
use darkstrip_core::config::{DEFAULT_EXTENSION, DEFAULT_ROOT};
use darkstrip_core::strip::DEFAULT_PREFIX;

/// Strip dark-mode utility classes (`dark:*`) from component sources
///
/// Scans ROOT recursively for files with the given extension and removes
/// every space-led token starting with the marker prefix, rewriting files
/// in place.
///
/// Examples:
///   darkstrip                         # src/**/*.tsx, strip dark:*
///   darkstrip --dry-run               # Report without writing
///   darkstrip --root app --ext jsx    # Other tree and extension
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "darkstrip")]
#[command(author, version, about)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Root directory to scan
    #[arg(long, env = "DARKSTRIP_ROOT", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// File extension to process (leading dot optional)
    #[arg(long, env = "DARKSTRIP_EXT", default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Marker prefix of tokens to remove
    #[arg(long, env = "DARKSTRIP_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Preview changes without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Output the batch report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Build the run configuration from the parsed flags.
    pub fn to_config(&self) -> StripConfig {
        StripConfig::default()
            .with_root(self.root.as_path())
            .with_extension(&self.ext)
            .with_prefix(self.prefix.as_str())
            .with_dry_run(self.dry_run)
    }
}

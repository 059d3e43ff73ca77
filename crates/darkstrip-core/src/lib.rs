//! Core of darkstrip
//!
//! Strips dark-mode utility tokens (`dark:*`) from source files:
//! - [`strip`]: the lexical token stripper
//! - [`process`]: read, strip and conditionally rewrite one file
//! - [`batch`]: enumerate files and process them sequentially

pub mod batch;
pub mod config;
pub mod error;
pub mod process;
pub mod report;
pub mod strip;

pub use batch::{Batch, Reporter};
pub use config::StripConfig;
pub use error::{Error, Result};
pub use process::{FileOutcome, FileProcessor};
pub use report::{BatchReport, FileEntry, Summary};
pub use strip::{DEFAULT_PREFIX, TokenStripper, strip_dark_tokens};

pub use darkstrip_fs::NormalizedPath;

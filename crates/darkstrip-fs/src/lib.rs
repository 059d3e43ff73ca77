//! Filesystem layer for darkstrip
//!
//! Provides normalized paths, text reads, atomic writes and recursive
//! file enumeration.

pub mod error;
pub mod io;
pub mod path;
pub mod scan;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use scan::find_files;

//! Command implementations for darkstrip-cli

pub mod strip;

pub use strip::{OutputFormat, run_strip};

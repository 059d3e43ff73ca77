//! Shared test utilities for the darkstrip workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`] builder for a temporary source tree

pub mod project;

pub use project::TestProject;

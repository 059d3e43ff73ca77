//! Error types for darkstrip-core

/// Result type for darkstrip-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in darkstrip-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Marker prefix must contain at least one character
    #[error("Marker prefix must not be empty")]
    EmptyPrefix,

    /// File extension must contain at least one character
    #[error("File extension must not be empty")]
    EmptyExtension,

    /// The token pattern failed to compile
    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A reporter could not emit a file's outcome
    #[error("Failed to report progress: {0}")]
    Report(#[source] std::io::Error),

    /// Filesystem error from darkstrip-fs
    #[error(transparent)]
    Fs(#[from] darkstrip_fs::Error),
}

//! Error types for the propeval library.

use std::io;
use thiserror::Error;

/// Result type alias for propeval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during proposal evaluation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file extension is not one of the supported formats.
    #[error("Unsupported format: .{0} (expected .docx or .pdf)")]
    UnsupportedFormat(String),

    /// The byte stream could not be parsed as the declared format.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The evaluation configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Dictionary lookup failed.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Named-entity extraction failed.
    #[error("Entity extraction error: {0}")]
    Entity(String),

    /// Error during report rendering (Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

//! Error types for the unform library.

use std::io;
use thiserror::Error;

/// Result type alias for unform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while ingesting or rendering analysis results.
///
/// The resolver itself never fails: unresolvable relationship targets,
/// missing value pairings, and orphaned cells all degrade to empty output.
/// Errors arise only at the edges: reading the analysis result in, or
/// serializing the resolved document out.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading an analysis-result file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The analysis result is missing its block list entirely.
    #[error("Invalid analysis input: {0}")]
    InvalidInput(String),

    /// The analysis result is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

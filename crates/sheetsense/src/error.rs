//! Error types for the sheetsense library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sheetsense operations.
///
/// Empty input, ragged rows and out-of-range mapping indices are not errors;
/// the pipeline absorbs them. Only genuinely unreadable input surfaces here.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spreadsheet binary could not be decoded.
    #[error("Format error: {0}")]
    Format(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SheetError {
    /// Returns true if this is the spreadsheet decoding failure.
    pub fn is_format_error(&self) -> bool {
        matches!(self, SheetError::Format(_))
    }
}

/// Result type alias for sheetsense operations.
pub type Result<T> = std::result::Result<T, SheetError>;

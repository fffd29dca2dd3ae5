//! Flat-file codec errors

use thiserror::Error;

/// Errors raised while encoding or decoding flat files
///
/// Every decode error is raised before any record is handed on, so a
/// rejected file never causes a partial import.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Fewer than two non-blank lines (no header or no data rows)
    #[error("CSV file is empty or invalid")]
    EmptyFile,

    /// Header lacks one or more mandatory columns
    #[error("Invalid CSV header, missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Structured text file produced no records
    #[error("No valid tools found in text file")]
    NoToolsFound,

    /// Nothing to write
    #[error("No tools to export")]
    NothingToExport,

    /// File name extension does not map to a known format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

pub type CodecResult<T> = Result<T, CodecError>;

//! Table reader trait and common types
//!
//! The `TableReader` trait provides a uniform interface for loading a
//! dataset from a file, whatever its delimiter.

use std::path::Path;

use thiserror::Error;

use crate::record::Dataset;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("CSV parsing error at line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Row {line} has no usable year (got '{value}')")]
    InvalidYear { line: u64, value: String },

    #[error("Row width mismatch: expected {expected} fields, got {actual}")]
    RowWidth { expected: usize, actual: usize },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for loading a dataset from a tabular source
pub trait TableReader {
    /// Read every row into an immutable dataset
    fn read_dataset(&self, name: &str) -> IoResult<Dataset>;

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&Path> {
        None
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn TableReader>;

/// Open a file and return an appropriate reader
///
/// The format is auto-detected from the file extension.
pub fn open_file(path: impl AsRef<Path>) -> IoResult<BoxedReader> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(Box::new(crate::csv_reader::CsvReader::open(path)?)),
        "tsv" => Ok(Box::new(crate::csv_reader::CsvReader::open_with_options(
            path, b'\t',
        )?)),
        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    vec!["csv", "tsv"]
}

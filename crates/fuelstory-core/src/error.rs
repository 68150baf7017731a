//! Error types for fuelstory-core
//!
//! Empty categories and degenerate numerics are not errors; they resolve to
//! `None` or to documented fallback values. What remains here are contract
//! violations and failures at the input boundary.

use thiserror::Error;

use fuelstory_io::IoError;

use crate::config::ConfigError;

/// Main error type for fuelstory operations
#[derive(Error, Debug)]
pub enum StoryError {
    /// Scene number outside 1..=4
    #[error("Invalid scene: {0} (expected 1-4)")]
    InvalidScene(u8),

    /// A series handed to the nearest-point index was not sorted by x
    #[error("Series is not sorted ascending at position {index}")]
    UnsortedSeries { index: usize },

    /// Scale lookup failures
    #[error("Scale error: {0}")]
    Scale(#[from] ScaleError),

    /// Data loading errors
    #[error("Failed to load data: {0}")]
    Data(#[from] IoError),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from scale lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// Key is not part of a band scale's domain
    #[error("Unknown category: {key}")]
    UnknownCategory { key: String },
}

/// Result type alias for fuelstory operations
pub type StoryResult<T> = Result<T, StoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_scene_display() {
        let err = StoryError::InvalidScene(5);
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_scale_error_display() {
        let err = ScaleError::UnknownCategory {
            key: "1999".to_string(),
        };
        assert!(err.to_string().contains("1999"));

        let wrapped: StoryError = err.into();
        assert!(matches!(wrapped, StoryError::Scale(_)));
    }

    #[test]
    fn test_data_error_conversion() {
        let err: StoryError = IoError::ColumnNotFound("year".to_string()).into();
        assert!(err.to_string().contains("year"));
    }
}

//! Error types and utilities for showtrend

use thiserror::Error;

/// Result type alias for showtrend operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Main error type for chart building
#[derive(Error, Debug)]
pub enum ChartError {
    /// The show carries no episodes at all; min/max and regression are
    /// undefined, so the render is aborted before any series is built.
    #[error("Empty dataset: {message}")]
    EmptyDataset { message: String },

    /// A season's episodes are interleaved with another season's in the
    /// full episode sequence, so the offset-based global x mapping would
    /// mis-position its points.
    #[error("Season {season} is not contiguous in the episode sequence")]
    NonContiguousSeason { season: u32 },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Serialization/deserialization errors at the message boundary
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ChartError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new empty-dataset error
    pub fn empty_dataset(msg: impl Into<String>) -> Self {
        Self::EmptyDataset {
            message: msg.into(),
        }
    }

    /// Create a new non-contiguous-season error
    pub fn non_contiguous_season(season: u32) -> Self {
        Self::NonContiguousSeason { season }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = ChartError::new("test message");
        assert!(error.to_string().contains("test message"));

        let empty_error = ChartError::empty_dataset("show has no episodes");
        assert!(empty_error.to_string().contains("Empty dataset"));
        assert!(empty_error.to_string().contains("show has no episodes"));

        let season_error = ChartError::non_contiguous_season(3);
        assert!(season_error.to_string().contains("Season 3"));
        assert!(season_error.to_string().contains("not contiguous"));

        let validation_error = ChartError::validation_field("must be positive", "season_number");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("must be positive"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "bad payload");
        let wrapped_error = ChartError::with_source("Failed to decode message", io_error);

        assert!(wrapped_error.to_string().contains("Failed to decode message"));
        assert!(wrapped_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let invalid_json = r#"{"invalid": json}"#;
        let serde_error = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let chart_error: ChartError = serde_error.into();

        assert!(chart_error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_display_formatting() {
        let error = ChartError::new("test error");
        assert_eq!(format!("{}", error), "test error");

        let empty_error = ChartError::empty_dataset("no episodes");
        assert_eq!(format!("{}", empty_error), "Empty dataset: no episodes");

        let season_error = ChartError::non_contiguous_season(2);
        assert_eq!(
            format!("{}", season_error),
            "Season 2 is not contiguous in the episode sequence"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(ChartError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
        assert!(returns_error().unwrap_err().to_string().contains("failure"));
    }
}

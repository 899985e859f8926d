//! Error types for outlier detection
//!
//! Provides a unified error type for all findoutlie crates.

use thiserror::Error;

/// Core error type for outlier detection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a detector
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a negative, NaN or infinite threshold
    pub fn invalid_threshold(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!(
            "{name} must be a finite, non-negative number, got {value}"
        ))
    }

    /// Create an error for NaN/Inf values in the measurements
    pub fn non_finite(index: usize) -> Self {
        Self::InvalidInput(format!(
            "measurement at index {index} is NaN or infinite"
        ))
    }

    /// The caller handed over data the detectors cannot classify
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InsufficientData { .. })
    }

    /// The caller configured a detector with a meaningless parameter
    pub fn is_logic_error(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

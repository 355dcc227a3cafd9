//! Error types for the repair_analytics crate

use thiserror::Error;

/// Custom error types for the repair_analytics crate
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to parameter validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to forecasting operations
    #[error("Forecasting error: {0}")]
    ForecastingError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, AnalyticsError>;

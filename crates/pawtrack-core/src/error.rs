//! Core error types for pawtrack-core.
//!
//! The analytics functions themselves are total; errors only surface from
//! the settings layer and from booking generation when it is invoked with an
//! invalid configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pawtrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Config directory could not be determined or created
    #[error("Configuration directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Threshold triple does not satisfy comfortable < busy < high
    #[error("Invalid {period} thresholds: {message}")]
    InvalidThresholds { period: String, message: String },

    /// Booking configuration failed validation
    #[error("Invalid booking configuration: {}", .errors.join("; "))]
    InvalidBooking { errors: Vec<String> },

    /// Time of day not in HH:mm form
    #[error("Invalid time '{value}': expected HH:mm")]
    InvalidTime { value: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

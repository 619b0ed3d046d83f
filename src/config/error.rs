//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),

    #[error("Capture duration must be at least one second")]
    InvalidCaptureDuration,

    #[error("Tick interval must be between 1 ms and 10 s")]
    InvalidTickInterval,

    #[error("Capture must request video, audio, or both")]
    NothingToCapture,

    #[error("Sleep quality threshold must be between 1 and 10")]
    InvalidSleepQualityThreshold,
}

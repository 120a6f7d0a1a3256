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
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Unsupported dataset file format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedDatasetFormat(String),

    #[error("Invalid benchmark version id: {0}")]
    InvalidBenchmarkVersionId(i64),

    #[error("Benchmark category must not be blank")]
    BlankBenchmarkCategory,
}

//! Custom error types for the common library
//!
//! This module defines the configuration errors shared by every binary
//! in the workspace.

use thiserror::Error;

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error occurred while reading or deserialising configuration sources
    #[error("Configuration load error: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A value was read but is not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Tracing could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

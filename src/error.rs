//! Domain error types for vibeview
//!
//! Provides structured error types for different domains:
//! - `ConfigError` for configuration loading and validation
//! - `ViewerError` for terminal setup and teardown
//!
//! The input core has no error type: unrecognised input degrades to
//! `Command::Unhandled` or a no-op.

use std::path::PathBuf;
use thiserror::Error;

/// Terminal lifecycle errors
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{name} must be a non-negative number of seconds, got {value}")]
    InvalidSeek { name: &'static str, value: f64 },

    #[error("{0} must be greater than zero")]
    ZeroWindow(&'static str),

    #[error("double_click_interval_ms ({interval_ms}) must not exceed click_window_ms ({window_ms})")]
    IntervalExceedsWindow { interval_ms: u64, window_ms: u64 },
}

/// Result type alias for ViewerError
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

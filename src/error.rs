//! Error types for logger configuration

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while setting up the logging pipeline.
///
/// Only one-time configuration surfaces errors, and it does so immediately.
/// The echo and log paths themselves never fail; they degrade instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Unrecognized format preset name
    #[error("invalid format preset: {0} (expected short, short-time, long or long-time)")]
    InvalidFormat(String),

    /// Unrecognized severity level name
    #[error("invalid level name: {0}")]
    InvalidLevel(String),

    /// I/O error while setting up a file sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for logger configuration

use thiserror::Error;

/// Result type alias for logger configuration
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger configuration.
///
/// Log calls themselves never fail; only parsing configuration and changing
/// a live logger's level can.
#[derive(Error, Debug)]
pub enum LogError {
    /// Level name not recognised
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    /// Output handler name not recognised
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// The backend refused a runtime level change
    #[error("failed to reload level filter: {0}")]
    Reload(String),
}

impl From<serde_json::Error> for LogError {
    fn from(err: serde_json::Error) -> Self {
        LogError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for LogError {
    fn from(err: toml::de::Error) -> Self {
        LogError::ConfigError(err.to_string())
    }
}

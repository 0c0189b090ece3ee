//! Errors raised while reading or writing `config.yml`.

use std::path::PathBuf;

/// Errors from loading, saving or interpreting the formctl settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` ran before `load` resolved a location
    #[error("Configuration file path not set")]
    FilePathNotSet,

    /// No home directory to place `.config/formctl` under
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// `config.yml` exists but could not be read
    #[error("Failed to read form settings from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// `formctl init` could not write `config.yml`
    #[error("Failed to write form settings to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings directory could not be created
    #[error("Failed to create settings directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Settings could not be rendered as YAML
    #[error("Failed to encode form settings: {0}")]
    SerializationFailed(String),

    /// `config.yml` is not valid YAML for the settings layout
    #[error("Failed to parse form settings: {0}")]
    DeserializationFailed(String),

    /// `method` is not an HTTP method the form can submit with
    #[error("Invalid form method: {0}")]
    InvalidMethod(String),

    /// Log level is not one of off, error, warn, info, debug, trace
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// No form action was configured
    #[error("Form action URL not set")]
    ActionNotSet,
}

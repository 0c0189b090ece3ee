//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::controller::ControllerError;
pub use crate::transport::TransportError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport setup errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Controller errors
    #[error("Controller error: {0}")]
    Controller(#[from] ControllerError),

    /// Form data files that could not be parsed
    #[error("Invalid form data: {0}")]
    FormData(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// Event loop shut down before replying
    #[error("Event handler stopped: {0}")]
    EventLoop(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

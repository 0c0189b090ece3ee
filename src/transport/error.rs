//! Transport-specific error types.

/// Errors that can occur while sending a form.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Request rejected (status {status}): {text}")]
    Status { status: u16, text: String },

    /// Form data could not be encoded as a request body
    #[error("Failed to encode request body: {0}")]
    Body(#[from] serde_json::Error),
}

//! Transport module.
//!
//! The controller sends forms through the [`Transport`] trait so that the
//! HTTP stack can be swapped out in tests. [`HttpClient`] is the `reqwest`
//! implementation.

mod client;
mod error;

pub use client::HttpClient;
pub use error::TransportError;
pub use reqwest::Method;

use crate::form::FormSnapshot;
use std::future::Future;

/// Performs one request and resolves with the raw response body.
///
pub trait Transport {
    /// Send a request with the given method to the URL. Non-success
    /// statuses reject with [`TransportError::Status`].
    fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&FormSnapshot>,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// Parse an HTTP method name, case-insensitively.
///
pub fn parse_method(name: &str) -> Option<Method> {
    Method::from_bytes(name.trim().to_ascii_uppercase().as_bytes()).ok()
}

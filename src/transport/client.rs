//! HTTP client for form submission.
//!
//! This module wraps `reqwest` behind the [`Transport`] trait, resolving
//! with the raw response text on success and rejecting with the status and
//! reason phrase otherwise.

use super::{Transport, TransportError};
use crate::form::FormSnapshot;
use log::*;
use reqwest::Method;
use std::time::Duration;

/// Sends form requests over HTTP.
///
#[derive(Clone)]
pub struct HttpClient {
    http_client: reqwest::Client,
}

impl HttpClient {
    /// Returns a new instance with an optional per-request timeout.
    ///
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(HttpClient {
            http_client: builder.build()?,
        })
    }
}

impl Transport for HttpClient {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&FormSnapshot>,
    ) -> Result<String, TransportError> {
        debug!("Sending {} request to {}...", method, url);
        let mut request = self.http_client.request(method, url);
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = status.canonical_reason().unwrap_or_default().to_owned();
            warn!("Form endpoint answered with status {}.", status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                text,
            });
        }

        let text = response.text().await?;
        debug!("Received {} bytes from {}.", text.len(), url);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn send_success() -> Result<(), TransportError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/submit");
                then.status(200).json_body(json!({ "status": "success" }));
            })
            .await;

        let client = HttpClient::new(None)?;
        let body = client
            .send(Method::POST, &server.url("/submit"), None)
            .await?;
        assert!(body.contains("success"));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn send_with_body() -> Result<(), TransportError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/submit")
                    .json_body(json!({ "fio": "a b c", "email": "x@ya.ru" }));
                then.status(200).body(r#"{"status":"success"}"#);
            })
            .await;

        let snapshot: FormSnapshot = [("fio", "a b c"), ("email", "x@ya.ru")]
            .into_iter()
            .collect();
        let client = HttpClient::new(None)?;
        client
            .send(Method::POST, &server.url("/submit"), Some(&snapshot))
            .await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn send_rejected() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/submit");
                then.status(503);
            })
            .await;

        let client = HttpClient::new(None).unwrap();
        let error = client
            .send(Method::GET, &server.url("/submit"), None)
            .await
            .unwrap_err();
        assert!(matches!(error, TransportError::Status { status: 503, .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_unreachable() {
        let client = HttpClient::new(Some(Duration::from_millis(500))).unwrap();
        let error = client
            .send(Method::POST, "http://127.0.0.1:1/submit", None)
            .await
            .unwrap_err();
        assert!(matches!(error, TransportError::Http(_)));
    }
}

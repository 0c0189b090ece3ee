//! Status envelope returned by the form endpoint.

use super::SubmissionFailure;
use serde::Deserialize;
use std::time::Duration;

/// Define specification for the response body.
///
#[derive(Deserialize)]
struct EnvelopeSpec {
    status: String,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    timeout: Option<f64>,
}

/// Parsed endpoint response.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEnvelope {
    Success,
    Error { reason: String },
    /// Not done yet, ask again after `timeout`.
    Progress { timeout: Duration },
}

impl ResponseEnvelope {
    /// Parse a response body. Unknown statuses and missing `reason` or
    /// `timeout` fields are reported as failures.
    ///
    pub fn parse(body: &str) -> Result<ResponseEnvelope, SubmissionFailure> {
        let spec: EnvelopeSpec = serde_json::from_str(body)
            .map_err(|e| SubmissionFailure::MalformedResponse(e.to_string()))?;

        match spec.status.as_str() {
            "success" => Ok(ResponseEnvelope::Success),
            "error" => spec
                .reason
                .map(|reason| ResponseEnvelope::Error { reason })
                .ok_or_else(|| missing("reason", "error")),
            "progress" => {
                let timeout = spec.timeout.ok_or_else(|| missing("timeout", "progress"))?;
                if !timeout.is_finite() || timeout < 0.0 {
                    return Err(SubmissionFailure::MalformedResponse(format!(
                        "invalid progress timeout {}",
                        timeout
                    )));
                }
                Ok(ResponseEnvelope::Progress {
                    timeout: Duration::from_millis(timeout.round() as u64),
                })
            }
            other => Err(SubmissionFailure::UnrecognizedStatus(other.to_owned())),
        }
    }
}

fn missing(field: &str, status: &str) -> SubmissionFailure {
    SubmissionFailure::MalformedResponse(format!(
        "missing '{}' for status '{}'",
        field, status
    ))
}

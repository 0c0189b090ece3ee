//! Controller-specific error types.

use super::SubmissionState;
use crate::transport::TransportError;

/// Errors returned by controller operations.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// A submit was requested while a previous cycle had not returned to idle
    #[error("Submission already in progress (state: {state})")]
    Busy { state: SubmissionState },
}

/// Reasons a submit cycle ended in the generic error state. These are
/// reported through the submit outcome, never returned as errors.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionFailure {
    /// Transport rejected the request or never got a response
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Response status is not one of success, error or progress
    #[error("Unrecognized response status: {0}")]
    UnrecognizedStatus(String),

    /// Response body is not a valid status envelope
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Progress responses exceeded the configured retry limit
    #[error("Gave up after {0} progress retries")]
    RetryLimit(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_error_display() {
        let error = ControllerError::Busy {
            state: SubmissionState::Sending,
        };
        assert!(error.to_string().contains("already in progress"));
        assert!(error.to_string().contains("sending"));
    }

    #[test]
    fn test_submission_failure_display() {
        let error = SubmissionFailure::UnrecognizedStatus("pending".to_string());
        assert!(error.to_string().contains("pending"));

        let error = SubmissionFailure::MalformedResponse("expected value".to_string());
        assert!(error.to_string().contains("Malformed response"));

        let error = SubmissionFailure::RetryLimit(3);
        assert!(error.to_string().contains('3'));

        let error: SubmissionFailure = TransportError::Status {
            status: 500,
            text: "Internal Server Error".to_string(),
        }
        .into();
        assert!(error.to_string().contains("500"));
    }
}

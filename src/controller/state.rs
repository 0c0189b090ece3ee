use super::SubmissionFailure;
use crate::validation::ValidationResult;
use std::time::Duration;

/// Specifying submission cycle state.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Sending,
    Reacting,
    RetryScheduled { delay: Duration },
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionState::Idle => f.write_str("idle"),
            SubmissionState::Validating => f.write_str("validating"),
            SubmissionState::Sending => f.write_str("sending"),
            SubmissionState::Reacting => f.write_str("reacting"),
            SubmissionState::RetryScheduled { delay } => {
                write!(f, "retry scheduled in {}ms", delay.as_millis())
            }
        }
    }
}

/// How a submit cycle ended.
///
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent.
    Invalid(ValidationResult),
    Succeeded,
    /// Endpoint answered with an error status.
    Rejected { reason: String },
    /// Shown to the user as the generic error state.
    Failed(SubmissionFailure),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }
}

/// Result of one call to submit, including every progress round.
///
#[derive(Debug)]
pub struct Submission {
    pub outcome: SubmitOutcome,
    /// Number of progress responses that led to a re-validation.
    pub retries: u32,
}

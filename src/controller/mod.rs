//! Submission controller.
//!
//! This module drives one form through the submit cycle:
//! - validate the current field values and mark failing fields
//! - disable the submit control and send the form through the transport
//! - reset the result container and react to the response status
//! - wait and start over from validation on a progress response
//!
//! The cycle is an explicit state machine ([`SubmissionState`]). Transport
//! and parse failures never escape `submit`; they end the cycle in the
//! generic error state with the submit control enabled again.

mod error;
mod response;
mod scheduler;
mod state;

pub use error::{ControllerError, SubmissionFailure};
pub use response::ResponseEnvelope;
pub use scheduler::{Scheduler, TokioScheduler};
pub use state::{Submission, SubmissionState, SubmitOutcome};

use crate::form::{FormSnapshot, FormSurface, ResultClass};
use crate::transport::Transport;
use crate::validation::{ValidationEngine, ValidationResult};
use log::*;

/// Text shown in the result container on success.
///
pub const SUCCESS_TEXT: &str = "Success";

/// Text shown in the result container when a cycle fails without a reason
/// from the endpoint.
///
pub const GENERIC_ERROR_TEXT: &str = "Something went wrong, please try again later";

/// Controller behavior that does not come from the form itself.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Field names that `apply_snapshot` may write.
    pub tracked_inputs: Vec<String>,
    /// Send the extracted snapshot as a JSON request body.
    pub send_body: bool,
    /// Stop after this many progress responses. Unbounded when `None`.
    pub max_progress_retries: Option<u32>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        ControllerOptions {
            tracked_inputs: default_tracked_inputs(),
            send_body: false,
            max_progress_retries: None,
        }
    }
}

/// Default set of fields eligible for write-back.
///
pub fn default_tracked_inputs() -> Vec<String> {
    ["fio", "phone", "email"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Owns a form and drives its validation and submission.
///
pub struct SubmissionController<F, T, S = TokioScheduler> {
    form: F,
    transport: T,
    scheduler: S,
    engine: ValidationEngine,
    options: ControllerOptions,
    state: SubmissionState,
}

impl<F, T, S> SubmissionController<F, T, S>
where
    F: FormSurface,
    T: Transport,
    S: Scheduler,
{
    /// Return a new idle controller bound to the form.
    ///
    pub fn new(form: F, transport: T, scheduler: S, options: ControllerOptions) -> Self {
        debug!(
            "Binding controller to form '{}' (tracked inputs: {:?})...",
            form.action(),
            options.tracked_inputs
        );
        SubmissionController {
            form,
            transport,
            scheduler,
            engine: ValidationEngine::new(),
            options,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Return every named field and its value, in document order.
    ///
    pub fn extract_snapshot(&self) -> FormSnapshot {
        self.form
            .field_names()
            .into_iter()
            .filter_map(|name| self.form.value(&name).map(|value| (name, value)))
            .collect()
    }

    /// Write the tracked fields present in `data` into the form. Returns
    /// the names that were written.
    ///
    pub fn apply_snapshot(&mut self, data: &FormSnapshot) -> Vec<String> {
        let mut written = vec![];
        for name in &self.options.tracked_inputs {
            if let Some(value) = data.get(name) {
                if self.form.set_value(name, value) {
                    written.push(name.clone());
                }
            }
        }
        let ignored: Vec<&str> = data
            .iter()
            .map(|(name, _)| name)
            .filter(|name| !self.options.tracked_inputs.iter().any(|t| t.as_str() == *name))
            .collect();
        if !ignored.is_empty() {
            debug!("Ignoring untracked fields {:?}.", ignored);
        }
        written
    }

    /// Clear the error marker from every named field.
    ///
    pub fn reset_field_highlights(&mut self) {
        for name in self.form.field_names() {
            self.form.set_field_error(&name, false);
        }
    }

    /// Validate the current field values and update the field markers.
    ///
    pub fn validate(&mut self) -> ValidationResult {
        let snapshot = self.extract_snapshot();
        let result = self.engine.validate(snapshot.iter());

        self.reset_field_highlights();
        for name in &result.error_fields {
            self.form.set_field_error(name, true);
        }
        if !result.is_valid {
            debug!("Validation failed for fields {:?}.", result.error_fields);
        }
        result
    }

    /// Run the submit cycle until it settles: invalid input, a success or
    /// error response, or a failure. Progress responses loop back into
    /// validation after the requested delay.
    ///
    pub async fn submit(&mut self) -> Result<Submission, ControllerError> {
        if self.state != SubmissionState::Idle {
            warn!("Ignoring submit request while {}.", self.state);
            return Err(ControllerError::Busy { state: self.state });
        }

        let mut retries = 0;
        loop {
            self.transition(SubmissionState::Validating);
            let validation = self.validate();
            if !validation.is_valid {
                if retries > 0 {
                    self.form.clear_result();
                }
                return Ok(self.settle(SubmitOutcome::Invalid(validation), retries));
            }

            self.form.set_submit_disabled(true);
            self.transition(SubmissionState::Sending);
            let method = self.form.method();
            let url = self.form.action();
            let body = self.options.send_body.then(|| self.extract_snapshot());
            let response = self.transport.send(method, &url, body.as_ref()).await;

            self.transition(SubmissionState::Reacting);
            self.form.clear_result();
            let envelope = match response
                .map_err(SubmissionFailure::from)
                .and_then(|body| ResponseEnvelope::parse(&body))
            {
                Ok(envelope) => envelope,
                Err(failure) => return Ok(self.fail(failure, retries)),
            };

            match envelope {
                ResponseEnvelope::Success => {
                    info!("Form submitted successfully.");
                    self.form.show_result(ResultClass::Success, SUCCESS_TEXT);
                    return Ok(self.settle(SubmitOutcome::Succeeded, retries));
                }
                ResponseEnvelope::Error { reason } => {
                    info!("Form rejected by endpoint: {}", reason);
                    self.form.show_result(ResultClass::Error, &reason);
                    return Ok(self.settle(SubmitOutcome::Rejected { reason }, retries));
                }
                ResponseEnvelope::Progress { timeout } => {
                    if let Some(limit) = self.options.max_progress_retries {
                        if retries >= limit {
                            return Ok(self.fail(SubmissionFailure::RetryLimit(limit), retries));
                        }
                    }
                    self.form.show_result(ResultClass::Progress, "");
                    self.transition(SubmissionState::RetryScheduled { delay: timeout });
                    self.scheduler.sleep(timeout).await;
                    retries += 1;
                }
            }
        }
    }

    /// Return a controller whose submit cycle was dropped midway to idle and
    /// enable the submit control again.
    ///
    pub fn abort(&mut self) {
        if self.state == SubmissionState::Idle {
            return;
        }
        warn!("Aborting submission while {}.", self.state);
        if self.form.result().class == Some(ResultClass::Progress) {
            self.form.clear_result();
        }
        self.form.set_submit_disabled(false);
        self.transition(SubmissionState::Idle);
    }

    fn fail(&mut self, failure: SubmissionFailure, retries: u32) -> Submission {
        error!("Form submission failed: {}", failure);
        self.form.clear_result();
        self.form.show_result(ResultClass::Error, GENERIC_ERROR_TEXT);
        self.settle(SubmitOutcome::Failed(failure), retries)
    }

    fn settle(&mut self, outcome: SubmitOutcome, retries: u32) -> Submission {
        self.form.set_submit_disabled(false);
        self.transition(SubmissionState::Idle);
        Submission { outcome, retries }
    }

    fn transition(&mut self, next: SubmissionState) {
        trace!("Submission state {} -> {}", self.state, next);
        self.state = next;
    }
}

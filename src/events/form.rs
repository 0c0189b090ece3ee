use crate::controller::{Scheduler, Submission, SubmissionController};
use crate::error::AppResult;
use crate::form::{FormSnapshot, FormSurface};
use crate::transport::Transport;
use crate::validation::ValidationResult;
use log::*;

/// Specify different form event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    /// Write tracked fields from the snapshot into the form.
    SetData(FormSnapshot),
    GetData,
    Validate,
    Submit,
    /// Return a controller left mid-cycle to idle.
    Abort,
}

/// Result of handling one event.
///
#[derive(Debug)]
pub enum Reply {
    Applied(Vec<String>),
    Data(FormSnapshot),
    Validated(ValidationResult),
    Submitted(Submission),
    Aborted,
}

/// Specify struct for applying form events to a controller.
///
pub struct Handler<'a, F, T, S> {
    controller: &'a mut SubmissionController<F, T, S>,
}

impl<'a, F, T, S> Handler<'a, F, T, S>
where
    F: FormSurface,
    T: Transport,
    S: Scheduler,
{
    /// Return new instance with reference to the controller.
    ///
    pub fn new(controller: &'a mut SubmissionController<F, T, S>) -> Self {
        Handler { controller }
    }

    /// Handle form events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> AppResult<Reply> {
        debug!("Processing form event '{:?}'...", event);
        let reply = match event {
            Event::SetData(data) => Reply::Applied(self.controller.apply_snapshot(&data)),
            Event::GetData => Reply::Data(self.controller.extract_snapshot()),
            Event::Validate => Reply::Validated(self.controller.validate()),
            Event::Submit => Reply::Submitted(self.submit().await?),
            Event::Abort => {
                self.controller.abort();
                Reply::Aborted
            }
        };
        Ok(reply)
    }

    /// Submit the form and log how the cycle ended.
    ///
    async fn submit(&mut self) -> AppResult<Submission> {
        info!("Submitting form...");
        let submission = self.controller.submit().await?;
        if submission.retries > 0 {
            info!(
                "Submission settled after {} progress retries.",
                submission.retries
            );
        }
        Ok(submission)
    }
}

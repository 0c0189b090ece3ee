use crate::config::Config;
use crate::controller::{SubmissionController, SubmitOutcome, TokioScheduler};
use crate::error::{AppError, AppResult};
use crate::events::form::{Event, Handler, Reply};
use crate::form::{FormSnapshot, FormSurface, MemoryForm};
use crate::transport::HttpClient;
use anyhow::{anyhow, Result};
use log::*;
use std::fs;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

type Controller = SubmissionController<MemoryForm, HttpClient, TokioScheduler>;
type EventSender = mpsc::UnboundedSender<Event>;
type EventReceiver = mpsc::UnboundedReceiver<Event>;
type ReplySender = mpsc::UnboundedSender<Reply>;

/// What the driver was asked to do with the form.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Validate,
    Submit,
}

/// Oversees form construction, event processing and output.
///
pub struct App {
    config: Config,
}

impl App {
    /// Build a form according to the given configuration, fill it with the
    /// data and run the command against it. Returns true if the command
    /// succeeded: the form validated, or the submission ended in success.
    ///
    pub async fn start(config: Config, command: Command, data: FormSnapshot) -> Result<bool> {
        info!("Starting form controller...");
        let app = App { config };
        let controller = app.build_controller(command)?;

        let (tx, rx) = mpsc::unbounded_channel::<Event>();
        let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<Reply>();
        let worker = app.start_events(controller, rx, reply_tx);

        app.dispatch(&tx, command, data)?;
        drop(tx);

        let mut succeeded = true;
        while let Some(reply) = reply_rx.recv().await {
            succeeded &= app.report(&reply)?;
        }

        let controller = worker.await?;
        if command == Command::Submit {
            let result = controller.form().result();
            match result.class {
                Some(class) => println!("{}: {}", class, result.text),
                None => println!("(no result)"),
            }
        }

        info!("Exiting form controller...");
        Ok(succeeded)
    }

    /// Return a controller bound to a form with the configured fields, all
    /// empty. Submitting requires a configured action.
    ///
    fn build_controller(&self, command: Command) -> AppResult<Controller> {
        let action = match command {
            Command::Submit => self.config.action()?.to_owned(),
            Command::Validate => self.config.action.clone().unwrap_or_default(),
        };
        let method = self.config.method()?;
        let form = self
            .config
            .fields
            .iter()
            .fold(MemoryForm::new(&action, method), |form, name| {
                form.with_field(name, "")
            });
        let transport = HttpClient::new(self.config.request_timeout())?;
        Ok(SubmissionController::new(
            form,
            transport,
            TokioScheduler,
            self.config.controller_options(),
        ))
    }

    /// Start a task that applies form events to the controller in order and
    /// hands the controller back once the event channel closes.
    ///
    fn start_events(
        &self,
        mut controller: Controller,
        mut receiver: EventReceiver,
        replies: ReplySender,
    ) -> JoinHandle<Controller> {
        debug!("Spawning form event task...");
        tokio::spawn(async move {
            let mut handler = Handler::new(&mut controller);
            while let Some(event) = receiver.recv().await {
                match handler.handle(event).await {
                    Ok(reply) => {
                        if replies.send(reply).is_err() {
                            warn!("Reply channel closed, stopping event task.");
                            break;
                        }
                    }
                    Err(e) => error!("Failed to handle form event: {}", e),
                }
            }
            drop(handler);
            controller
        })
    }

    fn dispatch(&self, sender: &EventSender, command: Command, data: FormSnapshot) -> Result<()> {
        let events = match command {
            Command::Validate => [Event::SetData(data), Event::Validate],
            Command::Submit => [Event::SetData(data), Event::Submit],
        };
        for event in events {
            sender
                .send(event)
                .map_err(|e| anyhow!(AppError::EventLoop(e.to_string())))?;
        }
        Ok(())
    }

    /// Print a reply. Returns false for replies that mean the command failed.
    ///
    fn report(&self, reply: &Reply) -> Result<bool> {
        match reply {
            Reply::Applied(written) => {
                info!("Applied tracked fields {:?}.", written);
                Ok(true)
            }
            Reply::Data(snapshot) => {
                println!("{}", serde_json::to_string_pretty(snapshot)?);
                Ok(true)
            }
            Reply::Validated(result) => {
                println!("{}", serde_json::to_string_pretty(result)?);
                Ok(result.is_valid)
            }
            Reply::Submitted(submission) => {
                match &submission.outcome {
                    SubmitOutcome::Invalid(result) => {
                        println!("invalid fields: {}", result.error_fields.join(", "))
                    }
                    SubmitOutcome::Succeeded => info!("Submission accepted."),
                    SubmitOutcome::Rejected { reason } => warn!("Submission rejected: {}", reason),
                    SubmitOutcome::Failed(failure) => error!("Submission failed: {}", failure),
                }
                Ok(submission.outcome.is_success())
            }
            Reply::Aborted => Ok(true),
        }
    }
}

/// Read form data from an optional JSON or YAML file and `name=value`
/// pairs. Pairs override values from the file.
///
pub fn load_form_data(path: Option<&str>, pairs: &[&str]) -> AppResult<FormSnapshot> {
    let mut data = match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            FormSnapshot::from_text(&contents)
                .map_err(|e| AppError::FormData(format!("{}: {}", path, e)))?
        }
        None => FormSnapshot::new(),
    };
    for pair in pairs {
        let (name, value) = FormSnapshot::parse_pair(pair)
            .ok_or_else(|| AppError::FormData(format!("expected name=value, got '{}'", pair)))?;
        data.insert(name, value);
    }
    Ok(data)
}

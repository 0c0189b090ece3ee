//! Form controller with per-field validation and polling HTTP submission.
//!
//! The crate is organized as follows:
//! - `validation`: field rules and the aggregate validation result
//! - `form`: the form surface trait, an in-memory form and form snapshots
//! - `transport`: the transport trait and its `reqwest` implementation
//! - `controller`: the submit state machine
//! - `events`: form events applied to a controller
//! - `app`, `config`, `error`, `logger`: the command line driver and its stack

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod form;
pub mod logger;
pub mod transport;
pub mod validation;

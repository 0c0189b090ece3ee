//! Form surface abstraction.
//!
//! The controller never talks to a concrete document. It reads and writes
//! named fields, toggles error markers, flips the submit control and
//! renders the result container through the [`FormSurface`] trait:
//! - `MemoryForm`: in-memory surface used by the command line driver and tests
//! - `FormSnapshot`: ordered name/value data moved in and out of a form

mod memory;
mod snapshot;

pub use memory::{Field, MemoryForm};
pub use snapshot::FormSnapshot;

use crate::transport::Method;
use serde::Serialize;

/// Result container classes. At most one is applied at a time.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultClass {
    Success,
    Error,
    Progress,
}

impl ResultClass {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultClass::Success => "success",
            ResultClass::Error => "error",
            ResultClass::Progress => "progress",
        }
    }
}

impl std::fmt::Display for ResultClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the result container currently shows.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub class: Option<ResultClass>,
    pub text: String,
}

/// Operations the controller needs from a form.
///
pub trait FormSurface {
    /// Target URL declared by the form.
    fn action(&self) -> String;

    /// HTTP method declared by the form.
    fn method(&self) -> Method;

    /// Names of every named field, in document order.
    fn field_names(&self) -> Vec<String>;

    fn value(&self, name: &str) -> Option<String>;

    /// Write a field value. Returns false when no field has that name.
    fn set_value(&mut self, name: &str, value: &str) -> bool;

    fn set_field_error(&mut self, name: &str, error: bool);

    fn has_field_error(&self, name: &str) -> bool;

    fn set_submit_disabled(&mut self, disabled: bool);

    fn is_submit_disabled(&self) -> bool;

    /// Remove every result class and clear the result text.
    fn clear_result(&mut self);

    /// Apply a result class and text to the result container.
    fn show_result(&mut self, class: ResultClass, text: &str);

    fn result(&self) -> ResultView;
}

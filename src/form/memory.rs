use super::{FormSnapshot, FormSurface, ResultClass, ResultView};
use crate::transport::Method;
use log::*;
use std::collections::BTreeSet;

/// A single named form field.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub error: bool,
}

impl Field {
    pub fn new(name: &str, value: &str) -> Self {
        Field {
            name: name.to_owned(),
            value: value.to_owned(),
            error: false,
        }
    }
}

/// In-memory form with ordered fields, a submit control and a result
/// container.
///
#[derive(Clone, Debug)]
pub struct MemoryForm {
    action: String,
    method: Method,
    fields: Vec<Field>,
    submit_disabled: bool,
    result_classes: BTreeSet<&'static str>,
    result_text: String,
}

impl MemoryForm {
    /// Return a new form without fields for the given action and method.
    ///
    pub fn new(action: &str, method: Method) -> Self {
        MemoryForm {
            action: action.to_owned(),
            method,
            fields: vec![],
            submit_disabled: false,
            result_classes: BTreeSet::new(),
            result_text: String::new(),
        }
    }

    /// Append a field, or update the value in place if the name exists.
    ///
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.add_field(name, value);
        self
    }

    pub fn add_field(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value.to_owned(),
            None => self.fields.push(Field::new(name, value)),
        }
    }

    /// Return a form whose fields mirror the snapshot, in snapshot order.
    ///
    pub fn from_snapshot(action: &str, method: Method, snapshot: &FormSnapshot) -> Self {
        snapshot
            .iter()
            .fold(MemoryForm::new(action, method), |form, (name, value)| {
                form.with_field(name, value)
            })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of result classes currently applied. Used to check that
    /// classes never coexist.
    ///
    pub fn result_class_count(&self) -> usize {
        self.result_classes.len()
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}

impl FormSurface for MemoryForm {
    fn action(&self) -> String {
        self.action.clone()
    }

    fn method(&self) -> Method {
        self.method.clone()
    }

    fn field_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| !f.name.is_empty())
            .map(|f| f.name.clone())
            .collect()
    }

    fn value(&self, name: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.clone())
    }

    fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.to_owned();
                true
            }
            None => {
                warn!("No field named '{}' to write to.", name);
                false
            }
        }
    }

    fn set_field_error(&mut self, name: &str, error: bool) {
        if let Some(field) = self.field_mut(name) {
            field.error = error;
        }
    }

    fn has_field_error(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name && f.error)
    }

    fn set_submit_disabled(&mut self, disabled: bool) {
        self.submit_disabled = disabled;
    }

    fn is_submit_disabled(&self) -> bool {
        self.submit_disabled
    }

    fn clear_result(&mut self) {
        self.result_classes.clear();
        self.result_text.clear();
    }

    fn show_result(&mut self, class: ResultClass, text: &str) {
        self.result_classes.insert(class.as_str());
        self.result_text = text.to_owned();
    }

    fn result(&self) -> ResultView {
        let class = [ResultClass::Success, ResultClass::Error, ResultClass::Progress]
            .into_iter()
            .find(|c| self.result_classes.contains(c.as_str()));
        ResultView {
            class,
            text: self.result_text.clone(),
        }
    }
}

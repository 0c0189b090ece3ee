//! Field validation.
//!
//! This module decides, per field, whether a value is acceptable and folds
//! the per-field outcomes into a single [`ValidationResult`]. Nothing here
//! touches the form surface, so it can be exercised with plain name/value
//! pairs.

mod rules;

pub use rules::{
    digit_sum, is_valid_email, is_valid_fio, is_valid_phone, FieldKind, EMAIL_DOMAINS,
    PHONE_DIGIT_SUM_LIMIT,
};

use serde::Serialize;

/// Aggregate verdict over every validated field of a form.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Names of the fields that failed, in form order.
    pub error_fields: Vec<String>,
}

impl ValidationResult {
    /// Return a passing result with no failed fields.
    ///
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            error_fields: vec![],
        }
    }

    fn reject(&mut self, name: &str) {
        self.is_valid = false;
        self.error_fields.push(name.to_owned());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        ValidationResult::valid()
    }
}

/// Maps field names to their rules and validates whole forms.
///
#[derive(Clone, Debug, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        ValidationEngine
    }

    /// Return the rule registered for the field name.
    ///
    pub fn rule_for(&self, name: &str) -> Option<FieldKind> {
        FieldKind::from_name(name)
    }

    /// Validate a single field. Returns `None` when no rule is registered
    /// for the name.
    ///
    pub fn check(&self, name: &str, value: &str) -> Option<bool> {
        self.rule_for(name).map(|kind| kind.check(value))
    }

    /// Validate every field in iteration order. Fields without a rule are
    /// skipped.
    ///
    pub fn validate<'a, I>(&self, fields: I) -> ValidationResult
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        fields
            .into_iter()
            .fold(ValidationResult::valid(), |mut result, (name, value)| {
                if self.check(name, value) == Some(false) {
                    result.reject(name);
                }
                result
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIO: &str = "Kulikov Vladimir Alekseevich";
    const EMAIL: &str = "vovakulikov@ya.ru";
    const PHONE: &str = "+7(111)222-33-11";

    #[test]
    fn test_validate_all_correct() {
        let engine = ValidationEngine::new();
        let result = engine.validate([("fio", FIO), ("email", EMAIL), ("phone", PHONE)]);
        assert_eq!(result, ValidationResult::valid());
        assert!(result.error_fields.is_empty());
    }

    #[test]
    fn test_validate_invalid_email() {
        let engine = ValidationEngine::new();
        let result = engine.validate([
            ("fio", FIO),
            ("email", "vova@gmail.com"),
            ("phone", PHONE),
        ]);
        assert!(!result.is_valid);
        assert_eq!(result.error_fields, vec!["email"]);
    }

    #[test]
    fn test_validate_keeps_form_order() {
        let engine = ValidationEngine::new();
        let result = engine.validate([
            ("phone", "+7(999)999-99-99"),
            ("fio", "Kulikov"),
            ("email", "nope"),
        ]);
        assert_eq!(result.error_fields, vec!["phone", "fio", "email"]);
        assert_eq!(result.is_valid, result.error_fields.is_empty());
    }

    #[test]
    fn test_validate_skips_unknown_fields() {
        let engine = ValidationEngine::new();
        let result = engine.validate([("comment", ""), ("fio", FIO), ("", "whatever")]);
        assert!(result.is_valid);
    }

    #[test]
    fn test_validate_empty_form() {
        let engine = ValidationEngine::new();
        let result = engine.validate(std::iter::empty());
        assert!(result.is_valid);
    }

    #[test]
    fn test_check_single_field() {
        let engine = ValidationEngine::new();
        assert_eq!(engine.check("email", EMAIL), Some(true));
        assert_eq!(engine.check("phone", "+7(111)222-33-1"), Some(false));
        assert_eq!(engine.check("comment", "anything"), None);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ValidationResult {
            is_valid: false,
            error_fields: vec!["fio".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "isValid": false, "errorFields": ["fio"] }));
    }
}

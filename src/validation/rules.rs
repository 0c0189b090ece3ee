//! Per-field validation rules.
//!
//! Every rule is a pure predicate over the raw string value of one field.
//! The set of rules is closed: a field either maps to one of the
//! [`FieldKind`] variants or it is not validated at all.

use log::*;
use regex::Regex;
use std::sync::OnceLock;

/// Domains accepted by the email rule.
///
pub const EMAIL_DOMAINS: [&str; 6] = [
    "ya.ru",
    "yandex.ru",
    "yandex.ua",
    "yandex.by",
    "yandex.kz",
    "yandex.com",
];

/// Phone mask, `+7(XXX)XXX-XX-XX`.
///
const PHONE_PATTERN: &str = r"^\+7\([0-9]{3}\)[0-9]{3}-[0-9]{2}-[0-9]{2}$";

/// Highest digit sum a phone number may have.
///
pub const PHONE_DIGIT_SUM_LIMIT: u32 = 30;

/// Number of tokens a full name must consist of.
///
const FIO_TOKENS: usize = 3;

/// Specifying the kinds of fields that carry a validation rule.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Full name: last, first and middle name.
    Fio,
    Email,
    Phone,
}

impl FieldKind {
    /// Every kind, in declaration order.
    ///
    pub const ALL: [FieldKind; 3] = [FieldKind::Fio, FieldKind::Email, FieldKind::Phone];

    /// Return the kind registered for a field name, if any.
    ///
    pub fn from_name(name: &str) -> Option<FieldKind> {
        match name {
            "fio" => Some(FieldKind::Fio),
            "email" => Some(FieldKind::Email),
            "phone" => Some(FieldKind::Phone),
            _ => None,
        }
    }

    /// Return the field name the kind is registered under.
    ///
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Fio => "fio",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
        }
    }

    /// Apply the rule for this kind to a raw field value.
    ///
    pub fn check(self, value: &str) -> bool {
        match self {
            FieldKind::Fio => is_valid_fio(value),
            FieldKind::Email => is_valid_email(value),
            FieldKind::Phone => is_valid_phone(value),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A full name is valid when it consists of exactly three tokens once
/// whitespace runs are collapsed and the ends trimmed.
///
pub fn is_valid_fio(value: &str) -> bool {
    value
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .count()
        == FIO_TOKENS
}

/// Characters that separate name tokens: Unicode white space without
/// NEL (U+0085), plus the byte order mark (U+FEFF).
///
fn is_separator(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        c => c.is_whitespace(),
    }
}

/// An email is valid when its domain is in [`EMAIL_DOMAINS`] and the local
/// part is not empty. Values with more than one `@` are rejected.
///
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if parts.next().is_some() {
        debug!("Rejecting email with more than one '@'.");
        return false;
    }
    !local.is_empty() && EMAIL_DOMAINS.contains(&domain)
}

/// A phone is valid when it matches the `+7(XXX)XXX-XX-XX` mask and its
/// digits sum to at most [`PHONE_DIGIT_SUM_LIMIT`].
///
pub fn is_valid_phone(value: &str) -> bool {
    let Some(mask) = phone_mask() else {
        return false;
    };
    mask.is_match(value) && digit_sum(value) <= PHONE_DIGIT_SUM_LIMIT
}

/// Sum every ASCII digit found in the value.
///
pub fn digit_sum(value: &str) -> u32 {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .sum()
}

fn phone_mask() -> Option<&'static Regex> {
    static MASK: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    match MASK.get_or_init(|| Regex::new(PHONE_PATTERN)) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Failed to compile phone pattern '{}': {}", PHONE_PATTERN, e);
            None
        }
    }
}

//! HTML form payloads and their validation.
//!
//! Each form deserializes from an urlencoded body with every field defaulting to an empty
//! string, so a missing field surfaces as a validation error instead of a rejected request.
//! `validate()` either yields the cleaned credentials sent upstream or a [`FormErrors`] map
//! rendered next to the offending inputs.

pub mod login;
pub mod register;

use std::collections::BTreeMap;

/// Message for a required field left empty.
pub const REQUIRED_MESSAGE: &str = "This field is required.";
/// Message for an email that does not look like `local@domain.tld`.
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";

/// Validation messages keyed by form field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors(BTreeMap<&'static str, Vec<String>>);

impl FormErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field`.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Messages recorded for `field`, empty when the field is valid.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no error was recorded, `Err(self)` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Trims `value` and records a required error when nothing is left.
pub(crate) fn required(errors: &mut FormErrors, field: &'static str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED_MESSAGE);
    }

    value.to_string()
}

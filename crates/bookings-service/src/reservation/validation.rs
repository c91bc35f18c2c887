//! Guest form validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use bookings_entity::GuestDetails;

const BLANK: &str = "This field cannot be blank";

/// Messages per form field, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// First message recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|m| m.first()).map(String::as_str)
    }

    /// Whether `field` has any message.
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// True when no field has a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields with messages.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// Check guest details, reporting every offending field.
///
/// A blank field gets only the blank message; rule messages are reported
/// for fields that have a value.
pub fn validate_guest(guest: &GuestDetails) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    let fields = [
        ("first_name", &guest.first_name),
        ("last_name", &guest.last_name),
        ("email", &guest.email),
        ("phone", &guest.phone),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            errors.add(name, BLANK);
        }
    }

    if let Err(rule_errors) = guest.validate() {
        for (field, messages) in FieldErrors::from(rule_errors).0 {
            if !errors.has(&field) {
                for message in messages {
                    errors.add(field.clone(), message);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Form validation controller with per-field error annotation.
//!
//! The controller owns field values and the error map. Error annotation is
//! an explicit mapping from field id to the current message, so a field has
//! at most one visible error at any time and teardown is just dropping the
//! controller.
//!
//! Event semantics, in the order the shell drives them:
//! - submit: clear every annotation, then validate all required fields from
//!   their current values; any failure rejects the attempt.
//! - input: optimistic clear of that field, then shape rules only (email and
//!   phone kinds, non-empty values). Required-ness and number range wait for
//!   the next submit.
//! - blur: required-and-empty shows the required message; anything else is
//!   left untouched.

use std::collections::HashMap;

use tracing::debug;

use crate::validate::{is_valid_email, is_valid_phone};

pub const AGE_MIN: i64 = 10;
pub const AGE_MAX: i64 = 25;

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PHONE: &str = "Please enter a valid phone number";
pub const MSG_AGE: &str = "Age must be between 10 and 25";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(pub &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Number,
    Select,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { error_count: usize },
}

impl SubmitOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Lenient integer parse for number fields: leading whitespace, optional
/// sign, then as many digits as are there. `"18 years"` parses as 18; a
/// value with no leading integer parses as `None` and is not range-checked.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

pub struct FormController {
    specs: Vec<FieldSpec>,
    values: HashMap<FieldId, String>,
    errors: HashMap<FieldId, String>,
}

impl FormController {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let values = specs.iter().map(|spec| (spec.id, String::new())).collect();
        Self {
            specs,
            values,
            errors: HashMap::new(),
        }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    fn spec(&self, field: FieldId) -> Option<FieldSpec> {
        self.specs.iter().copied().find(|spec| spec.id == field)
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Stores the new value and runs input-time revalidation for the field.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        if self.spec(field).is_none() {
            return;
        }
        self.values.insert(field, value.into());
        self.handle_input(field);
    }

    /// Prefills a value without triggering input-time revalidation; used
    /// when opening an edit form over an existing record.
    pub fn seed_value(&mut self, field: FieldId, value: impl Into<String>) {
        if self.spec(field).is_some() {
            self.values.insert(field, value.into());
        }
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Annotates `field` with `message`, replacing any previous annotation.
    /// Unknown fields have no group to attach the message to, so this is a
    /// no-op for them.
    pub fn show_error(&mut self, field: FieldId, message: impl Into<String>) {
        if self.spec(field).is_none() {
            return;
        }
        self.errors.insert(field, message.into());
    }

    pub fn clear_error(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Full validation pass over every required field, from a clean slate.
    /// The first failing rule per field wins.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.clear_errors();
        let specs: Vec<FieldSpec> = self.specs.clone();
        for spec in specs.into_iter().filter(|spec| spec.required) {
            let value = self.value(spec.id).to_owned();
            if value.trim().is_empty() {
                self.show_error(spec.id, MSG_REQUIRED);
            } else if spec.kind == FieldKind::Email && !is_valid_email(&value) {
                self.show_error(spec.id, MSG_EMAIL);
            } else if spec.kind == FieldKind::Phone && !is_valid_phone(&value) {
                self.show_error(spec.id, MSG_PHONE);
            } else if spec.kind == FieldKind::Number {
                if let Some(age) = parse_leading_int(&value) {
                    if !(AGE_MIN..=AGE_MAX).contains(&age) {
                        self.show_error(spec.id, MSG_AGE);
                    }
                }
            }
        }
        if self.errors.is_empty() {
            SubmitOutcome::Accepted
        } else {
            let error_count = self.errors.len();
            debug!(error_count, "submit blocked by field validation");
            SubmitOutcome::Rejected { error_count }
        }
    }

    /// Input-time feedback: clear, then shape rules only. Deliberately a
    /// subset of the submit checks.
    pub fn handle_input(&mut self, field: FieldId) {
        let Some(spec) = self.spec(field) else {
            return;
        };
        self.clear_error(field);
        let value = self.value(field).to_owned();
        if value.is_empty() {
            return;
        }
        match spec.kind {
            FieldKind::Email if !is_valid_email(&value) => self.show_error(field, MSG_EMAIL),
            FieldKind::Phone if !is_valid_phone(&value) => self.show_error(field, MSG_PHONE),
            _ => {}
        }
    }

    /// Blur only surfaces missing required values; it never clears.
    pub fn handle_blur(&mut self, field: FieldId) {
        let Some(spec) = self.spec(field) else {
            return;
        };
        if spec.required && self.value(field).trim().is_empty() {
            self.show_error(field, MSG_REQUIRED);
        }
    }
}

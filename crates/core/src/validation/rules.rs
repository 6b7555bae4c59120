//! Validation outcome types and per-field error messages.

use serde::Serialize;

use crate::form::field;

/// Fields in display order. The first field with a violation is the one an
/// adapter should focus. The honeypot is absent here on purpose: tripping it
/// aborts the whole pass before any field rule runs.
pub const FIELD_ORDER: &[&str] = &[
    field::FIRST_NAME,
    field::LAST_NAME,
    field::EMAIL,
    field::PASSWORD,
    field::CONFIRM,
    field::PHONE,
    field::DOB,
    field::GENDER,
    field::COURSE,
    field::MODE,
    field::CGPA,
    field::PORTFOLIO,
    field::PHOTO,
    field::COMM,
    field::TERMS,
];

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required.";
pub const MSG_EMAIL_FORMAT: &str = "Enter a valid email address.";
pub const MSG_PASSWORD: &str = "Min 8 chars, include a number and a symbol.";
pub const MSG_CONFIRM: &str = "Passwords do not match.";
pub const MSG_PHONE: &str = "Enter a valid 10-digit phone number (with optional country code).";
pub const MSG_DOB_REQUIRED: &str = "Date of birth is required.";
pub const MSG_DOB_TOO_YOUNG: &str = "You must be at least 16 years old.";
pub const MSG_GENDER: &str = "Please select a gender.";
pub const MSG_COURSE: &str = "Please choose a course.";
pub const MSG_MODE: &str = "Please select a study mode.";
pub const MSG_CGPA: &str = "CGPA must be between 0 and 10.";
pub const MSG_PORTFOLIO: &str = "Enter a valid URL (including http/https).";
pub const MSG_PHOTO: &str = "Only PNG/JPG up to 2 MB.";
pub const MSG_COMM: &str = "Select at least one communication method.";
pub const MSG_TERMS: &str = "You must agree to the terms.";

/// A single field-level rule violation. The first failing rule for a field
/// wins, so a field appears at most once per report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

/// The violations from one validation pass, in field order.
///
/// A fresh report is produced on every pass; nothing carries over from a
/// previous attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The field an adapter should focus: the first failing field in
    /// [`FIELD_ORDER`].
    pub fn first_invalid(&self) -> Option<&'static str> {
        self.violations.first().map(|v| v.field)
    }

    /// The displayed message for a field, if it failed.
    pub fn message_for(&self, name: &str) -> Option<&'static str> {
        self.violations
            .iter()
            .find(|v| v.field == name)
            .map(|v| v.message)
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub(crate) fn record(&mut self, field: &'static str, message: &'static str) {
        if self.violations.iter().any(|v| v.field == field) {
            return;
        }
        self.violations.push(FieldViolation { field, message });
    }
}

/// Result of checking a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The honeypot was filled in: an automated submission. Abort without
    /// running any field rule and without constructing a report.
    Bot,
    /// Field rules ran to completion; an empty report means the form passed.
    Report(ValidationReport),
}

impl ValidationOutcome {
    /// Convenience for callers that only need pass/fail.
    pub fn passed(&self) -> bool {
        matches!(self, ValidationOutcome::Report(r) if r.is_valid())
    }
}

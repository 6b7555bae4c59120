//! Rule evaluator -- pure logic, no DOM, no clock, no network.
//!
//! [`validate`] runs every field rule against a [`FormData`] snapshot in the
//! fixed [`FIELD_ORDER`](super::rules::FIELD_ORDER) and returns the full set
//! of violations. Per field, the first failing rule wins. The honeypot is
//! checked before anything else and aborts the pass outright.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use url::Url;

use crate::form::{field, FieldValue, FileMeta, FormData};

use super::rules::{
    FieldViolation, ValidationOutcome, ValidationReport, MSG_CGPA, MSG_COMM, MSG_CONFIRM,
    MSG_COURSE, MSG_DOB_REQUIRED, MSG_DOB_TOO_YOUNG, MSG_EMAIL_FORMAT, MSG_EMAIL_REQUIRED,
    MSG_GENDER, MSG_MODE, MSG_PASSWORD, MSG_PHONE, MSG_PHOTO, MSG_PORTFOLIO, MSG_REQUIRED,
    MSG_TERMS,
};

/// Minimum password length in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum age in whole calendar years.
pub const MIN_AGE_YEARS: i32 = 16;

/// Upper bound on an uploaded photo, in bytes (2 MiB).
pub const MAX_PHOTO_BYTES: u64 = 2 * 1024 * 1024;

/// MIME types accepted for the photo upload.
pub const ACCEPTED_PHOTO_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// CGPA bounds, inclusive.
pub const CGPA_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

// local@domain.tld shape: no whitespace or extra '@' on either side, and the
// domain carries at least one dot. Deliberately far short of RFC 822.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

// Optional country code (`+` and 1-3 digits, optional `-`/space separator),
// then exactly 10 digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+?\d{1,3}[- ]?)?\d{10}$").expect("valid regex"));

/// Validate a submitted form against the full rule set.
///
/// Returns [`ValidationOutcome::Bot`] without running any field rule when
/// the honeypot is filled in. Otherwise every field is checked and all
/// violations are reported together, ordered by field position, so an
/// adapter can display every message at once and focus the first.
pub fn validate(form: &FormData, today: NaiveDate) -> ValidationOutcome {
    if honeypot_tripped(form) {
        return ValidationOutcome::Bot;
    }

    let checks = [
        check_required_text(form, field::FIRST_NAME),
        check_required_text(form, field::LAST_NAME),
        check_email(form),
        check_password(form),
        check_confirm(form),
        check_phone(form),
        check_dob(form, today),
        check_gender(form),
        check_course(form),
        check_mode(form),
        check_cgpa(form),
        check_portfolio(form),
        check_photo(form),
        check_comm(form),
        check_terms(form),
    ];

    let mut report = ValidationReport::default();
    for violation in checks.into_iter().flatten() {
        report.record(violation.field, violation.message);
    }
    ValidationOutcome::Report(report)
}

fn honeypot_tripped(form: &FormData) -> bool {
    form.text(field::NICKNAME)
        .is_some_and(|v| !v.trim().is_empty())
}

fn fail(field: &'static str, message: &'static str) -> Option<FieldViolation> {
    Some(FieldViolation { field, message })
}

fn check_required_text(form: &FormData, name: &'static str) -> Option<FieldViolation> {
    if form.text(name).unwrap_or_default().trim().is_empty() {
        fail(name, MSG_REQUIRED)
    } else {
        None
    }
}

fn check_email(form: &FormData) -> Option<FieldViolation> {
    let value = form.text(field::EMAIL).unwrap_or_default().trim();
    if value.is_empty() {
        fail(field::EMAIL, MSG_EMAIL_REQUIRED)
    } else if !is_valid_email(value) {
        fail(field::EMAIL, MSG_EMAIL_FORMAT)
    } else {
        None
    }
}

fn check_password(form: &FormData) -> Option<FieldViolation> {
    let value = form.text(field::PASSWORD).unwrap_or_default();
    if is_valid_password(value) {
        None
    } else {
        fail(field::PASSWORD, MSG_PASSWORD)
    }
}

// Compared exactly as typed; both rules can fire at once (a weak password
// that also differs from its confirmation reports on both fields).
fn check_confirm(form: &FormData) -> Option<FieldViolation> {
    let password = form.text(field::PASSWORD).unwrap_or_default();
    let confirm = form.text(field::CONFIRM).unwrap_or_default();
    if password == confirm {
        None
    } else {
        fail(field::CONFIRM, MSG_CONFIRM)
    }
}

fn check_phone(form: &FormData) -> Option<FieldViolation> {
    let value = form.text(field::PHONE).unwrap_or_default().trim();
    if is_valid_phone(value) {
        None
    } else {
        fail(field::PHONE, MSG_PHONE)
    }
}

fn check_dob(form: &FormData, today: NaiveDate) -> Option<FieldViolation> {
    let value = form.text(field::DOB).unwrap_or_default();
    if value.is_empty() {
        return fail(field::DOB, MSG_DOB_REQUIRED);
    }
    // A date input submits ISO "YYYY-MM-DD"; anything unparseable fails the
    // age check rather than raising an error.
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(dob) if is_at_least_16(dob, today) => None,
        _ => fail(field::DOB, MSG_DOB_TOO_YOUNG),
    }
}

fn check_gender(form: &FormData) -> Option<FieldViolation> {
    if form.text(field::GENDER).unwrap_or_default().is_empty() {
        fail(field::GENDER, MSG_GENDER)
    } else {
        None
    }
}

fn check_course(form: &FormData) -> Option<FieldViolation> {
    if form.text(field::COURSE).unwrap_or_default().trim().is_empty() {
        fail(field::COURSE, MSG_COURSE)
    } else {
        None
    }
}

fn check_mode(form: &FormData) -> Option<FieldViolation> {
    if form.text(field::MODE).unwrap_or_default().is_empty() {
        fail(field::MODE, MSG_MODE)
    } else {
        None
    }
}

fn check_cgpa(form: &FormData) -> Option<FieldViolation> {
    let value = form.text(field::CGPA).unwrap_or_default();
    if value.is_empty() || is_valid_cgpa(value) {
        None
    } else {
        fail(field::CGPA, MSG_CGPA)
    }
}

fn check_portfolio(form: &FormData) -> Option<FieldViolation> {
    let value = form.text(field::PORTFOLIO).unwrap_or_default().trim();
    if value.is_empty() || is_valid_portfolio_url(value) {
        None
    } else {
        fail(field::PORTFOLIO, MSG_PORTFOLIO)
    }
}

fn check_photo(form: &FormData) -> Option<FieldViolation> {
    match form.file(field::PHOTO) {
        Some(meta) if !is_acceptable_photo(meta) => fail(field::PHOTO, MSG_PHOTO),
        _ => None,
    }
}

fn check_comm(form: &FormData) -> Option<FieldViolation> {
    let any_checked = match form.get(field::COMM) {
        Some(FieldValue::Many(values)) => !values.is_empty(),
        Some(FieldValue::Text(value)) => !value.is_empty(),
        _ => false,
    };
    if any_checked {
        None
    } else {
        fail(field::COMM, MSG_COMM)
    }
}

fn check_terms(form: &FormData) -> Option<FieldViolation> {
    if form.text(field::TERMS).unwrap_or_default().is_empty() {
        fail(field::TERMS, MSG_TERMS)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Pure predicates, shared by the field checks and usable on their own
// ---------------------------------------------------------------------------

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// At least [`MIN_PASSWORD_LEN`] characters, at least one ASCII digit, and at
/// least one symbol. A symbol is anything that is not alphanumeric, not an
/// underscore, and not whitespace.
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(is_password_symbol)
}

fn is_password_symbol(c: char) -> bool {
    !c.is_alphanumeric() && c != '_' && !c.is_whitespace()
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Calendar-based age check: true when someone born on `dob` has had their
/// sixteenth birthday on or before `today`. Year/month/day comparison, not
/// elapsed time.
pub fn is_at_least_16(dob: NaiveDate, today: NaiveDate) -> bool {
    dob <= latest_qualifying_birth_date(today)
}

// The most recent birth date that still counts as 16 years old today. When
// today is Feb 29 and the year 16 years back has no Feb 29, the anniversary
// rolls forward to Mar 1.
fn latest_qualifying_birth_date(today: NaiveDate) -> NaiveDate {
    let year = today.year() - MIN_AGE_YEARS;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 is always valid"))
}

pub fn is_valid_cgpa(value: &str) -> bool {
    value
        .parse::<f64>()
        .map(|n| CGPA_RANGE.contains(&n))
        .unwrap_or(false)
}

/// Any well-formed absolute URL qualifies; relative references do not.
pub fn is_valid_portfolio_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

pub fn is_acceptable_photo(meta: &FileMeta) -> bool {
    ACCEPTED_PHOTO_TYPES.contains(&meta.mime_type.as_str()) && meta.size_bytes <= MAX_PHOTO_BYTES
}

//! Core domain logic for the enroll registration service.
//!
//! Pure types and functions only: the form data model, the field validation
//! engine, and the submission normalizer. No HTTP, no I/O, no ambient state --
//! callers pass in a form snapshot and, where a rule depends on it, "today".

pub mod form;
pub mod normalize;
pub mod types;
pub mod validation;

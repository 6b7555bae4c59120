//! Field validation engine.
//!
//! Pure logic over a [`crate::form::FormData`] snapshot: rule outcome types
//! and an evaluator that runs every field rule in a fixed order. Rendering
//! and focus management belong to whatever adapter consumes the report.

pub mod evaluator;
pub mod rules;

pub use evaluator::validate;
pub use rules::{FieldViolation, ValidationOutcome, ValidationReport};

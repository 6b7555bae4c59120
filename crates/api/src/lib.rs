//! HTTP layer for the enroll registration service.
//!
//! Serves the registration form, accepts multipart submissions, hands them
//! to the core normalizer, and logs the resulting payload. The validation
//! rule set itself lives in `enroll-core`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod state;

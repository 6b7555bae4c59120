//! Shared primitive type aliases.

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

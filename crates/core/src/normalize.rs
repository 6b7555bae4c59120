//! Submission normalizer.
//!
//! Multi-value fields reach the server in transport-dependent shapes: a
//! multi-select may arrive as one string, a comma-joined string, or repeated
//! parts already collapsed into an array; a checkbox group arrives as a
//! single value or an array. These functions reshape them into canonical
//! arrays and assemble the payload handed to the logging collaborator.
//!
//! Normalization is total over its accepted input shapes and performs no
//! validation: the server trusts the client-side pass and records whatever
//! it was sent.

use serde::Serialize;

use crate::form::{field, FieldValue, FileMeta, FormData};
use crate::types::Timestamp;

/// The server-observed snapshot of one submission. Built once per request,
/// immutable afterwards, and discarded after logging -- nothing persists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub submitted_at: Timestamp,
    pub fields: FormData,
    pub file: Option<FileMeta>,
}

/// Canonicalize a multi-select value into an array.
///
/// A comma-joined string splits into trimmed parts; a plain string wraps
/// into a one-element array; an existing array passes through untouched, so
/// the function is idempotent.
pub fn normalize_multi_select(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(s) if s.contains(',') => {
            FieldValue::Many(s.split(',').map(|part| part.trim().to_string()).collect())
        }
        FieldValue::Text(s) => FieldValue::Many(vec![s]),
        other => other,
    }
}

/// Canonicalize a checkbox-group value into an array: a single value wraps,
/// an array passes through. No comma splitting -- a checked box's value is
/// opaque text.
pub fn normalize_checkbox_group(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(s) => FieldValue::Many(vec![s]),
        other => other,
    }
}

/// Assemble the canonical payload for one submission.
///
/// Reshapes the multi-valued fields (`skills`, `comm`) when present; an
/// absent field stays absent rather than becoming an empty array. The
/// timestamp is generated once by the caller at normalization time.
pub fn normalize_submission(
    mut fields: FormData,
    file: Option<FileMeta>,
    submitted_at: Timestamp,
) -> SubmissionPayload {
    if let Some(value) = fields.get(field::SKILLS).cloned() {
        fields.insert(field::SKILLS, normalize_multi_select(value));
    }
    if let Some(value) = fields.get(field::COMM).cloned() {
        fields.insert(field::COMM, normalize_checkbox_group(value));
    }

    SubmissionPayload {
        submitted_at,
        fields,
        file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    fn many(items: &[&str]) -> FieldValue {
        FieldValue::Many(items.iter().map(|s| s.to_string()).collect())
    }

    fn stamp() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 45).unwrap()
    }

    #[test]
    fn comma_joined_string_splits_and_trims() {
        assert_eq!(
            normalize_multi_select(text("a, b,c")),
            many(&["a", "b", "c"])
        );
    }

    #[test]
    fn single_value_wraps_into_array() {
        assert_eq!(normalize_multi_select(text("a")), many(&["a"]));
    }

    #[test]
    fn existing_array_passes_through() {
        assert_eq!(normalize_multi_select(many(&["a", "b"])), many(&["a", "b"]));
    }

    #[test]
    fn multi_select_normalization_is_idempotent() {
        let once = normalize_multi_select(text("a, b,c"));
        let twice = normalize_multi_select(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn array_elements_containing_commas_are_not_resplit() {
        assert_eq!(normalize_multi_select(many(&["a,b"])), many(&["a,b"]));
    }

    #[test]
    fn checkbox_group_single_value_wraps() {
        assert_eq!(normalize_checkbox_group(text("yes")), many(&["yes"]));
    }

    #[test]
    fn checkbox_group_array_passes_through() {
        assert_eq!(
            normalize_checkbox_group(many(&["yes", "no"])),
            many(&["yes", "no"])
        );
    }

    #[test]
    fn checkbox_group_does_not_split_commas() {
        assert_eq!(normalize_checkbox_group(text("a,b")), many(&["a,b"]));
    }

    #[test]
    fn payload_normalizes_skills_and_comm() {
        let mut fields = FormData::new();
        fields.push_text(field::FIRST_NAME, "Ada".to_string());
        fields.push_text(field::SKILLS, "ml,web".to_string());
        fields.push_text(field::COMM, "email".to_string());

        let payload = normalize_submission(fields, None, stamp());

        assert_eq!(payload.fields.get(field::SKILLS), Some(&many(&["ml", "web"])));
        assert_eq!(payload.fields.get(field::COMM), Some(&many(&["email"])));
        // Untouched fields keep their shape.
        assert_eq!(payload.fields.text(field::FIRST_NAME), Some("Ada"));
        assert_eq!(payload.submitted_at, stamp());
    }

    #[test]
    fn absent_multi_fields_stay_absent() {
        let mut fields = FormData::new();
        fields.push_text(field::FIRST_NAME, "Ada".to_string());

        let payload = normalize_submission(fields, None, stamp());

        assert!(payload.fields.get(field::SKILLS).is_none());
        assert!(payload.fields.get(field::COMM).is_none());
    }

    #[test]
    fn normalization_preserves_field_order() {
        let mut fields = FormData::new();
        fields.push_text(field::FIRST_NAME, "Ada".to_string());
        fields.push_text(field::SKILLS, "ml,web".to_string());
        fields.push_text(field::TERMS, "on".to_string());

        let payload = normalize_submission(fields, None, stamp());

        let names: Vec<&str> = payload.fields.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec![field::FIRST_NAME, field::SKILLS, field::TERMS]);
    }

    #[test]
    fn file_metadata_is_carried_through() {
        let meta = FileMeta {
            original_name: "me.png".to_string(),
            mime_type: "image/png".to_string(),
            size_bytes: 1234,
        };
        let payload = normalize_submission(FormData::new(), Some(meta.clone()), stamp());
        assert_eq!(payload.file, Some(meta));
    }

    #[test]
    fn payload_serializes_with_rfc3339_timestamp_and_null_file() {
        let mut fields = FormData::new();
        fields.push_text(field::COMM, "email".to_string());
        let payload = normalize_submission(fields, None, stamp());

        let json = serde_json::to_value(&payload).unwrap();
        // chrono serializes DateTime<Utc> in RFC 3339 form.
        let rendered = json["submitted_at"].as_str().unwrap();
        assert!(rendered.starts_with("2026-08-07T12:30:45"));
        assert!(json["file"].is_null());
        assert_eq!(json["fields"]["comm"][0], "email");
    }
}

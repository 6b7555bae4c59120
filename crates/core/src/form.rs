//! Form data model: field names, field values, and the submitted-form map.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// Wire names of the registration form fields, in the order the form lays
/// them out. Multipart fields arrive under these names.
pub mod field {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    /// Hidden honeypot field. Humans never fill it in.
    pub const NICKNAME: &str = "nickname";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM: &str = "confirm";
    pub const PHONE: &str = "phone";
    pub const DOB: &str = "dob";
    pub const GENDER: &str = "gender";
    pub const COURSE: &str = "course";
    pub const MODE: &str = "mode";
    pub const CGPA: &str = "cgpa";
    pub const PORTFOLIO: &str = "portfolio";
    pub const SKILLS: &str = "skills";
    pub const PHOTO: &str = "photo";
    pub const COMM: &str = "comm";
    pub const TERMS: &str = "terms";
}

/// Metadata for an uploaded file. The raw bytes are never carried past the
/// request that produced them; only this summary survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMeta {
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// A single form field value.
///
/// Serializes untagged so a logged payload reads like the wire data: a plain
/// string, an array of strings, or a file-descriptor object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Many(Vec<String>),
    File(FileMeta),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            FieldValue::Many(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileMeta> {
        match self {
            FieldValue::File(f) => Some(f),
            _ => None,
        }
    }
}

/// A snapshot of submitted form fields, keyed by field name.
///
/// Preserves insertion order so the logged payload matches the order the
/// fields arrived on the wire. The validation engine reads from this map and
/// never mutates the stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    fields: IndexMap<String, FieldValue>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. Replacing keeps the field's original
    /// position in the map.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Append a text value under `name`, collapsing repeated names into an
    /// array. This mirrors how a checkbox group or multi-select arrives as
    /// several same-named multipart parts.
    pub fn push_text(&mut self, name: &str, value: String) {
        match self.fields.entry(name.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(FieldValue::Text(value));
            }
            Entry::Occupied(mut entry) => {
                let slot = entry.get_mut();
                match slot {
                    FieldValue::Text(existing) => {
                        let first = std::mem::take(existing);
                        *slot = FieldValue::Many(vec![first, value]);
                    }
                    FieldValue::Many(values) => values.push(value),
                    // A file slot is never merged with text parts.
                    FieldValue::File(_) => {}
                }
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The field's text value, if it is present and a single string.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// The field's file metadata, if it is present and a file.
    pub fn file(&self, name: &str) -> Option<&FileMeta> {
        self.get(name).and_then(FieldValue::as_file)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

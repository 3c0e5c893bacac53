//! Per-field validation error map shared by every form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Client-side checks and server-side (Django-style) validation payloads
//! both land here. Server payloads arrive either as `{"field": ["msg"]}`,
//! `{"field": "msg"}`, or a banner-style `{"error"/"detail": "msg"}`; the
//! first message wins per field and banner text maps to the general key.

#[cfg(test)]
#[path = "field_errors_test.rs"]
mod field_errors_test;

use std::collections::BTreeMap;

/// Map key for errors not tied to a single input.
pub const GENERAL_ERROR_KEY: &str = "general";

/// Inline validation errors keyed by input field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`, replacing any previous one.
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Error text for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Drop the error for `field`. Call when the user edits that input.
    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Record a banner-style error not tied to one input.
    pub fn set_general(&mut self, message: impl Into<String>) {
        self.set(GENERAL_ERROR_KEY, message);
    }

    /// Banner-style error text, if any.
    #[must_use]
    pub fn general(&self) -> Option<&str> {
        self.get(GENERAL_ERROR_KEY)
    }

    /// Iterate `(field, message)` pairs in stable field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge a server validation payload under the server's field names.
    ///
    /// Banner keys (`error`, `detail`, `message`, `non_field_errors`) map to
    /// [`GENERAL_ERROR_KEY`]; everything else keeps its field name with the
    /// first message found for it.
    pub fn merge_server_payload(&mut self, payload: &serde_json::Value) {
        let Some(object) = payload.as_object() else {
            return;
        };
        for (key, value) in object {
            let Some(message) = first_message(value) else {
                continue;
            };
            match key.as_str() {
                "error" | "detail" | "message" | "non_field_errors" => self.set_general(message),
                _ => self.set(key.clone(), message),
            }
        }
    }

    /// Build a map directly from a server validation payload.
    #[must_use]
    pub fn from_server_payload(payload: &serde_json::Value) -> Self {
        let mut errors = Self::new();
        errors.merge_server_payload(payload);
        errors
    }

    /// Fold every entry into this map, replacing duplicates.
    pub fn extend(&mut self, other: &FieldErrors) {
        for (field, message) in &other.errors {
            self.errors.insert(field.clone(), message.clone());
        }
    }
}

/// First human-readable message inside a server error value.
fn first_message(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_message),
        serde_json::Value::Object(map) => map.values().find_map(first_message),
        _ => None,
    }
}

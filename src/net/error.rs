//! Error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! `Display` output is banner-ready user text. Server validation payloads
//! become [`ApiError::Validation`] carrying the same `FieldErrors` map the
//! client-side validators produce, so a form renders both identically.
//! A 401 never reaches callers as payload text; the shared send path turns
//! it into [`ApiError::Unauthorized`] after tearing the session down.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::forms::field_errors::FieldErrors;

/// What went wrong with an API call, as surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Banner text straight from the server (`error`/`detail`/`message`).
    #[error("{0}")]
    Message(String),
    /// Per-field server validation payload.
    #[error("Please correct the highlighted fields")]
    Validation(FieldErrors),
    /// Non-2xx response with no usable body.
    #[error("Request failed with status {status}")]
    Status { status: u16 },
    /// Session rejected; the global policy already cleared it.
    #[error("Session expired, please sign in again")]
    Unauthorized,
    /// Transport-level failure before any response arrived.
    #[error("Network error: {0}")]
    Network(String),
    /// Response body did not match the expected shape.
    #[error("Unexpected response from the server")]
    Decode(String),
    /// The issuing view aborted the request; discard silently.
    #[error("Request aborted")]
    Aborted,
    /// Networking stub outside the browser build.
    #[error("Networking is only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether the caller should discard this error without display.
    #[must_use]
    pub fn is_abort(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }

    /// Per-field map when the server rejected individual inputs.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation(fields) => Some(fields),
            _ => None,
        }
    }

    /// Fold this error into a form's error map: validation payloads merge
    /// field-by-field, banner-style errors land in the general slot, and
    /// aborted/unauthorized errors are dropped (the view is gone or a
    /// redirect is already underway).
    pub fn merge_into(&self, errors: &mut FieldErrors) {
        match self {
            ApiError::Validation(fields) => errors.extend(fields),
            ApiError::Aborted | ApiError::Unauthorized => {}
            other => errors.set_general(other.to_string()),
        }
    }

    /// A fresh error map for this error. Empty for aborted/unauthorized
    /// errors, which render nothing.
    #[must_use]
    pub fn to_field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        self.merge_into(&mut errors);
        errors
    }
}

/// Decode a non-2xx response body into the taxonomy.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn error_from_response(status: u16, body: &str) -> ApiError {
    let Ok(payload) = serde_json::from_str::<serde_json::Value>(body) else {
        return ApiError::Status { status };
    };
    let Some(object) = payload.as_object() else {
        return ApiError::Status { status };
    };
    for key in ["error", "detail", "message"] {
        if let Some(text) = object.get(key).and_then(serde_json::Value::as_str) {
            return ApiError::Message(text.to_owned());
        }
    }
    let fields = FieldErrors::from_server_payload(&payload);
    if fields.is_empty() {
        ApiError::Status { status }
    } else {
        ApiError::Validation(fields)
    }
}

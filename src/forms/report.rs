//! Report form (campaigns and comments) draft and validation.
//!
//! The same payload shape serves both report endpoints; the description
//! minimum is enforced here so an under-length report never reaches the
//! network.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use serde::Serialize;

use super::field_errors::FieldErrors;

/// Shortest accepted description, measured after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Longest accepted description.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Why a campaign or comment is being reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    #[default]
    InappropriateContent,
    Spam,
    Fraud,
    Copyright,
    Harassment,
    Other,
}

impl ReportKind {
    /// Every kind, in the order the picker lists them.
    pub const ALL: [ReportKind; 6] = [
        ReportKind::InappropriateContent,
        ReportKind::Spam,
        ReportKind::Fraud,
        ReportKind::Copyright,
        ReportKind::Harassment,
        ReportKind::Other,
    ];

    /// Wire value sent as `report_type`.
    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            ReportKind::InappropriateContent => "inappropriate_content",
            ReportKind::Spam => "spam",
            ReportKind::Fraud => "fraud",
            ReportKind::Copyright => "copyright",
            ReportKind::Harassment => "harassment",
            ReportKind::Other => "other",
        }
    }

    /// Display label for the picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReportKind::InappropriateContent => "Inappropriate Content",
            ReportKind::Spam => "Spam",
            ReportKind::Fraud => "Fraud",
            ReportKind::Copyright => "Copyright Violation",
            ReportKind::Harassment => "Harassment",
            ReportKind::Other => "Other",
        }
    }
}

/// In-progress report input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub kind: ReportKind,
    pub description: String,
}

/// Wire payload for the campaign and comment report endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    pub report_type: ReportKind,
    pub description: String,
}

impl ReportDraft {
    /// Check the description bounds and produce the wire payload.
    ///
    /// # Errors
    ///
    /// Returns the error map when the trimmed description is under
    /// [`MIN_DESCRIPTION_CHARS`] or over [`MAX_DESCRIPTION_CHARS`].
    pub fn validate(&self) -> Result<ReportPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let description = self.description.trim();
        let length = description.chars().count();
        if length < MIN_DESCRIPTION_CHARS {
            errors.set(
                "description",
                "Please provide a description of at least 10 characters",
            );
        } else if length > MAX_DESCRIPTION_CHARS {
            errors.set("description", "Description must be less than 500 characters");
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ReportPayload {
            report_type: self.kind,
            description: description.to_owned(),
        })
    }
}

//! Comment form draft and validation.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use serde::Serialize;

use super::field_errors::FieldErrors;

/// Shortest accepted comment, measured after trimming.
pub const MIN_CONTENT_CHARS: usize = 3;

/// Longest accepted comment, matching the server's column limit.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// In-progress comment input. `parent` carries the root comment id when the
/// user is writing a one-level reply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub content: String,
    pub parent: Option<i64>,
}

/// Wire payload for `POST comments/project/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
}

impl CommentDraft {
    /// Check the content bounds and produce the wire payload.
    ///
    /// # Errors
    ///
    /// Returns the error map when the trimmed content is under
    /// [`MIN_CONTENT_CHARS`] or over [`MAX_CONTENT_CHARS`].
    pub fn validate(&self) -> Result<NewComment, FieldErrors> {
        let mut errors = FieldErrors::new();
        let content = self.content.trim();
        let length = content.chars().count();
        if length < MIN_CONTENT_CHARS {
            errors.set("content", "Comment must be at least 3 characters");
        } else if length > MAX_CONTENT_CHARS {
            errors.set("content", "Comment must be less than 1000 characters");
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewComment {
            content: content.to_owned(),
            parent: self.parent,
        })
    }
}

//! Comment thread state: client-side threading over the server's flat
//! list, plus the report flow.
//!
//! DESIGN
//! ======
//! The server stores comments flat; the client derives a one-level
//! thread. Roots keep server order; replies group under their parent; a
//! reply whose parent is absent from the list is promoted to a root so
//! nothing silently disappears. Flagged comments stay visible but render
//! de-emphasized and take no actions.
//!
//! Reporting is optimistic: the reported id leaves the local list before
//! any network wait. Reconciliation is keyed on the server's
//! acknowledgment, and the refetched list replaces local state wholesale.
//! Last refresh wins; there is no rollback bookkeeping, so a comment the
//! server confirms removed never comes back, and one it still returns
//! simply reappears.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::forms::comment::CommentDraft;
use crate::forms::field_errors::FieldErrors;
use crate::forms::report::ReportDraft;
use crate::net::api::Api;
use crate::net::types::Comment;
use crate::util::abort::FetchAbort;

/// Where the current report action stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportFlow {
    #[default]
    Idle,
    Submitting {
        comment_id: i64,
    },
    Failed {
        message: String,
    },
}

/// The thread behind a campaign's comment section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentThread {
    comments: Vec<Comment>,
    pub loading: bool,
    pub error: Option<String>,
    pub report: ReportFlow,
}

impl CommentThread {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the thread wholesale with a fetched list.
    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
        self.loading = false;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Top-level comments in server order. A reply whose parent is not in
    /// the list is promoted to a root.
    #[must_use]
    pub fn roots(&self) -> Vec<&Comment> {
        let ids: HashSet<i64> = self.comments.iter().map(|comment| comment.id).collect();
        self.comments
            .iter()
            .filter(|comment| match comment.parent {
                None => true,
                Some(parent) => !ids.contains(&parent),
            })
            .collect()
    }

    /// Replies under one root, in server order.
    #[must_use]
    pub fn replies_of(&self, parent_id: i64) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|comment| comment.parent == Some(parent_id))
            .collect()
    }

    /// Optimistic removal: the reported id leaves the list now, before
    /// any network wait.
    pub fn begin_report(&mut self, comment_id: i64) {
        self.comments.retain(|comment| comment.id != comment_id);
        self.report = ReportFlow::Submitting { comment_id };
    }

    pub fn report_failed(&mut self, message: String) {
        self.report = ReportFlow::Failed { message };
    }

    /// Back to idle, after an acknowledgment, an abort, or a dismissed
    /// error.
    pub fn end_report(&mut self) {
        self.report = ReportFlow::Idle;
    }
}

/// Flagged comments render de-emphasized and take no actions.
#[must_use]
pub fn is_interactive(comment: &Comment) -> bool {
    !comment.is_flagged
}

/// Fetch the flat list, replacing local state wholesale.
pub async fn load_comments(
    state: RwSignal<CommentThread>,
    api: &Api,
    project_id: i64,
    abort: &FetchAbort,
) {
    state.update(CommentThread::begin_load);
    match api.project_comments(project_id, abort).await {
        Ok(comments) => state.update(|thread| thread.set_comments(comments)),
        Err(err) if err.is_abort() => {}
        Err(err) => state.update(|thread| thread.apply_error(err.to_string())),
    }
}

/// Validate and post a comment or reply, then refetch so ids, counts,
/// and flags come back authoritative.
///
/// # Errors
/// The validation or server error map; empty when the request was
/// aborted.
pub async fn submit_comment(
    state: RwSignal<CommentThread>,
    api: &Api,
    project_id: i64,
    draft: &CommentDraft,
    abort: &FetchAbort,
) -> Result<(), FieldErrors> {
    let payload = draft.validate()?;
    match api.post_comment(project_id, &payload, abort).await {
        Ok(_) => {
            load_comments(state, api, project_id, abort).await;
            Ok(())
        }
        Err(err) => Err(err.to_field_errors()),
    }
}

/// Report a comment: validate first (an under-length description never
/// reaches the network), remove the comment optimistically, then
/// reconcile by refetching once the server acknowledges. On failure the
/// error is shown and the thread is left to the next refetch.
///
/// # Errors
/// The validation error map, which keeps the report dialog open. Network
/// failures land in [`ReportFlow::Failed`] instead.
pub async fn report_and_reconcile(
    state: RwSignal<CommentThread>,
    api: &Api,
    project_id: i64,
    comment_id: i64,
    draft: &ReportDraft,
    abort: &FetchAbort,
) -> Result<(), FieldErrors> {
    let payload = draft.validate()?;
    state.update(|thread| thread.begin_report(comment_id));
    match api.report_comment(comment_id, &payload, abort).await {
        Ok(_ack) => {
            state.update(CommentThread::end_report);
            load_comments(state, api, project_id, abort).await;
            Ok(())
        }
        Err(err) if err.is_abort() => {
            state.update(CommentThread::end_report);
            Ok(())
        }
        Err(err) => {
            log::debug!("comments: report of {comment_id} failed: {err}");
            state.update(|thread| thread.report_failed(err.to_string()));
            Ok(())
        }
    }
}

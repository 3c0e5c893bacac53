//! Comment endpoints. The server stores comments flat; threading is a
//! client-side concern (`state::comments`).

use super::api::Api;
use super::error::ApiError;
use super::types::{Ack, Comment, ListBody};
use crate::forms::comment::NewComment;
use crate::forms::report::ReportPayload;
use crate::util::abort::FetchAbort;

impl Api {
    /// Flat comment list for a campaign.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn project_comments(
        &self,
        project_id: i64,
        abort: &FetchAbort,
    ) -> Result<Vec<Comment>, ApiError> {
        let body: ListBody<Comment> = self
            .get_json(&format!("comments/project/{project_id}/"), abort)
            .await?;
        Ok(body.into_parts().0)
    }

    /// Post a comment or, with a parent id, a one-level reply.
    ///
    /// # Errors
    /// [`ApiError::Validation`] with the server's per-field messages.
    pub async fn post_comment(
        &self,
        project_id: i64,
        payload: &NewComment,
        abort: &FetchAbort,
    ) -> Result<Comment, ApiError> {
        self.post_json(&format!("comments/project/{project_id}/"), payload, abort)
            .await
    }

    /// Report a comment. Acknowledged with `{message}`; a duplicate report
    /// is refused with the server's explanation.
    ///
    /// # Errors
    /// [`ApiError::Message`] with the server's refusal text.
    pub async fn report_comment(
        &self,
        comment_id: i64,
        payload: &ReportPayload,
        abort: &FetchAbort,
    ) -> Result<Ack, ApiError> {
        self.post_json(
            &format!("comments/comment/{comment_id}/report/"),
            payload,
            abort,
        )
        .await
    }
}

//! Detail-page state: one campaign, its similar strip, and the donate /
//! rate / report actions.
//!
//! Aggregates are never recomputed locally. A donation stores the
//! refreshed campaign the server sends back; a rating stores the new
//! aggregate from the response. A failed primary load sets a terminal
//! fallback flag and the caller leaves for the listing rather than
//! rendering an empty page.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use leptos::prelude::*;

use crate::forms::donate::DonationDraft;
use crate::forms::field_errors::FieldErrors;
use crate::forms::report::ReportDraft;
use crate::net::api::Api;
use crate::net::api_projects::valid_rating;
use crate::net::types::{DonateResponse, Project, RateResponse, SimilarProjects};
use crate::util::abort::FetchAbort;

/// State behind the campaign detail page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub project: Option<Project>,
    pub similar: Vec<Project>,
    pub loading: bool,
    /// The primary load failed; leave for the listing.
    pub failed: bool,
    /// Banner for non-form actions (rating, reporting).
    pub action_error: Option<String>,
    /// Acknowledgment text worth surfacing (e.g. a report's).
    pub notice: Option<String>,
}

impl DetailState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.failed = false;
    }

    pub fn apply_project(&mut self, project: Project) {
        self.project = Some(project);
        self.loading = false;
    }

    pub fn apply_load_failure(&mut self) {
        self.loading = false;
        self.failed = true;
    }

    pub fn apply_similar(&mut self, similar: SimilarProjects) {
        self.similar = similar.similar_projects;
    }

    /// A donation succeeded; the response's refreshed campaign replaces
    /// the local one.
    pub fn apply_donation(&mut self, response: DonateResponse) {
        if let Some(project) = response.project {
            self.project = Some(project);
        }
        self.action_error = None;
    }

    /// A rating succeeded; only the aggregate moves.
    pub fn apply_rating(&mut self, response: RateResponse) {
        if let Some(project) = self.project.as_mut() {
            project.average_rating = response.project_average_rating;
            project.ratings_count = response.project_total_ratings;
        }
        self.action_error = None;
    }

    pub fn apply_action_error(&mut self, message: String) {
        self.action_error = Some(message);
    }

    pub fn apply_notice(&mut self, message: String) {
        self.notice = Some(message);
        self.action_error = None;
    }

    pub fn dismiss_feedback(&mut self) {
        self.action_error = None;
        self.notice = None;
    }
}

/// Load the campaign, then its similar strip. The strip is decorative;
/// only the primary load can flag fallback.
pub async fn load_detail(state: RwSignal<DetailState>, api: &Api, id: i64, abort: &FetchAbort) {
    state.update(DetailState::begin_load);
    match api.project_detail(id, abort).await {
        Ok(project) => state.update(|detail| detail.apply_project(project)),
        Err(err) if err.is_abort() => return,
        Err(err) => {
            log::warn!("detail: load of campaign {id} failed: {err}");
            state.update(DetailState::apply_load_failure);
            return;
        }
    }
    if let Ok(similar) = api.similar_projects(id, abort).await {
        state.update(|detail| detail.apply_similar(similar));
    }
}

/// Validate and submit a donation. Field problems come back for inline
/// display; on success the refreshed campaign lands in state.
///
/// # Errors
/// The validation or server error map; empty when the request was
/// aborted, which renders nothing.
pub async fn submit_donation(
    state: RwSignal<DetailState>,
    api: &Api,
    id: i64,
    draft: &DonationDraft,
    abort: &FetchAbort,
) -> Result<(), FieldErrors> {
    let payload = draft.validate()?;
    match api.donate(id, &payload, abort).await {
        Ok(response) => {
            state.update(|detail| detail.apply_donation(response));
            Ok(())
        }
        Err(err) => Err(err.to_field_errors()),
    }
}

/// Submit a star rating; feedback goes to the action banner.
pub async fn submit_rating(
    state: RwSignal<DetailState>,
    api: &Api,
    id: i64,
    rating: u8,
    abort: &FetchAbort,
) {
    if !valid_rating(rating) {
        state.update(|detail| detail.apply_action_error("Pick 1 to 5 stars".to_owned()));
        return;
    }
    match api.rate(id, rating, abort).await {
        Ok(response) => state.update(|detail| detail.apply_rating(response)),
        Err(err) if err.is_abort() => {}
        Err(err) => state.update(|detail| detail.apply_action_error(err.to_string())),
    }
}

/// Validate and submit a campaign report. Validation problems keep the
/// dialog open; the server's acknowledgment lands in the notice slot.
///
/// # Errors
/// The validation or server error map; empty when the request was
/// aborted.
pub async fn submit_report(
    state: RwSignal<DetailState>,
    api: &Api,
    id: i64,
    draft: &ReportDraft,
    abort: &FetchAbort,
) -> Result<(), FieldErrors> {
    let payload = draft.validate()?;
    match api.report_project(id, &payload, abort).await {
        Ok(ack) => {
            state.update(|detail| detail.apply_notice(ack.message));
            Ok(())
        }
        Err(err) => Err(err.to_field_errors()),
    }
}

//! Creator dashboard state: owned campaigns, donation history, the
//! headline stats derived from both, and cancellation.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::types::{DonationRecord, OwnedProject};
use crate::util::abort::FetchAbort;

/// Cancellation closes at this funded percentage.
pub const CANCEL_THRESHOLD: f64 = 25.0;

/// Cancellation stays open strictly below the threshold: 24.99% is
/// eligible, 25% is not.
#[must_use]
pub fn can_cancel(funding_percentage: f64) -> bool {
    funding_percentage < CANCEL_THRESHOLD
}

/// Headline numbers over both dashboard lists.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_raised: f64,
    pub total_donations: usize,
    pub total_donated: f64,
}

/// State behind the creator dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub projects: Vec<OwnedProject>,
    pub donations: Vec<DonationRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_data(&mut self, projects: Vec<OwnedProject>, donations: Vec<DonationRecord>) {
        self.projects = projects;
        self.donations = donations;
        self.loading = false;
    }

    pub fn apply_projects(&mut self, projects: Vec<OwnedProject>) {
        self.projects = projects;
        self.loading = false;
    }

    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn apply_notice(&mut self, message: String) {
        self.notice = Some(message);
        self.error = None;
    }

    pub fn dismiss_feedback(&mut self) {
        self.error = None;
        self.notice = None;
    }

    /// A deleted campaign's row leaves the list.
    pub fn remove_project(&mut self, id: i64) {
        self.projects.retain(|project| project.id != id);
    }

    /// Stats shown at the top of the dashboard.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_projects: self.projects.len(),
            total_raised: self.projects.iter().map(|p| p.current_amount).sum(),
            total_donations: self.donations.len(),
            total_donated: self.donations.iter().map(|d| d.amount).sum(),
        }
    }
}

/// Fetch both dashboard lists. One failure surfaces one banner; an
/// aborted fetch surfaces nothing.
pub async fn load_dashboard(state: RwSignal<DashboardState>, api: &Api, abort: &FetchAbort) {
    state.update(DashboardState::begin_load);
    let projects = match api.my_projects(abort).await {
        Ok(projects) => projects,
        Err(err) if err.is_abort() => return,
        Err(err) => {
            state.update(|dashboard| dashboard.apply_error(err.to_string()));
            return;
        }
    };
    match api.my_donations(abort).await {
        Ok(donations) => state.update(|dashboard| dashboard.apply_data(projects, donations)),
        Err(err) if err.is_abort() => {}
        Err(err) => state.update(|dashboard| dashboard.apply_error(err.to_string())),
    }
}

/// Cancel an owned campaign with a required reason. On success the owned
/// list is refetched; the cancelled campaign stays listed, now inactive.
pub async fn cancel_campaign(
    state: RwSignal<DashboardState>,
    api: &Api,
    id: i64,
    reason: &str,
    abort: &FetchAbort,
) {
    let reason = reason.trim();
    if reason.is_empty() {
        state.update(|dashboard| {
            dashboard.apply_error("A cancellation reason is required".to_owned());
        });
        return;
    }
    match api.cancel_project(id, reason, abort).await {
        Ok(response) => {
            state.update(|dashboard| dashboard.apply_notice(response.message));
            if let Ok(projects) = api.my_projects(abort).await {
                state.update(|dashboard| dashboard.apply_projects(projects));
            }
        }
        Err(err) if err.is_abort() => {}
        Err(err) => state.update(|dashboard| dashboard.apply_error(err.to_string())),
    }
}

/// Delete an owned campaign outright; on success its row leaves the
/// local list.
pub async fn delete_campaign(
    state: RwSignal<DashboardState>,
    api: &Api,
    id: i64,
    abort: &FetchAbort,
) {
    match api.delete_project(id, abort).await {
        Ok(()) => state.update(|dashboard| dashboard.remove_project(id)),
        Err(err) if err.is_abort() => {}
        Err(err) => state.update(|dashboard| dashboard.apply_error(err.to_string())),
    }
}

//! Campaign listing state: filters, 1-based paging, in-page dedup, and
//! local ordering.
//!
//! DESIGN
//! ======
//! The server filters and orders; the client composes query parameters
//! and renders what comes back. Two rules apply to every page before
//! render: duplicate ids collapse to their first occurrence, and the
//! survivors are re-normalized to the active sort key, so a page that
//! arrives slightly off (the duplicate question is still open with the
//! API owner) still renders consistently. The server stays authoritative
//! for everything else.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::types::Project;
use crate::util::abort::FetchAbort;

/// Fixed server page size.
pub const PAGE_SIZE: i64 = 12;

/// Sort keys offered by the listing, with their server ordering tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Latest,
    Popular,
    Rating,
    Ending,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Latest, Self::Popular, Self::Rating, Self::Ending];

    /// The `ordering` query value the server understands.
    #[must_use]
    pub fn ordering(self) -> &'static str {
        match self {
            Self::Latest => "-created_at",
            Self::Popular => "-total_donations",
            Self::Rating => "-average_rating",
            Self::Ending => "end_time",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Popular => "Most popular",
            Self::Rating => "Top rated",
            Self::Ending => "Ending soon",
        }
    }
}

/// Status facet; `All` sends nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Ended,
    Featured,
}

impl StatusFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Active, Self::Ended, Self::Featured];

    #[must_use]
    pub fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Active => Some("active"),
            Self::Ended => Some("ended"),
            Self::Featured => Some("featured"),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Ended => "Ended",
            Self::Featured => "Featured",
        }
    }
}

/// Everything the listing sends as query parameters. Goal bounds stay as
/// raw input text; blank or whitespace values are simply not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectFilters {
    pub search: String,
    /// Category slug; empty means all.
    pub category: String,
    pub tag: String,
    pub min_goal: String,
    pub max_goal: String,
    pub status: StatusFilter,
    pub sort: SortKey,
}

impl ProjectFilters {
    /// Query pairs for `GET projects/`, page included.
    #[must_use]
    pub fn query_pairs(&self, page: i64) -> Vec<(String, String)> {
        let mut pairs = vec![("page".to_owned(), page.to_string())];
        push_trimmed(&mut pairs, "search", &self.search);
        push_trimmed(&mut pairs, "category", &self.category);
        push_trimmed(&mut pairs, "tag", &self.tag);
        push_trimmed(&mut pairs, "min_goal", &self.min_goal);
        push_trimmed(&mut pairs, "max_goal", &self.max_goal);
        if let Some(status) = self.status.wire_value() {
            pairs.push(("status".to_owned(), status.to_owned()));
        }
        pairs.push(("ordering".to_owned(), self.sort.ordering().to_owned()));
        pairs
    }

    /// Anything set beyond the defaults?
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        *self != Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn push_trimmed(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        pairs.push((key.to_owned(), value.to_owned()));
    }
}

/// One rendered page of the campaign listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    pub filters: ProjectFilters,
    /// 1-based.
    pub page: i64,
    pub projects: Vec<Project>,
    /// Server total when the body was a pagination envelope.
    pub total_count: Option<i64>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            filters: ProjectFilters::default(),
            page: 1,
            projects: Vec::new(),
            total_count: None,
            loading: false,
            loaded: false,
            error: None,
        }
    }
}

impl ListingState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetched page: duplicate ids collapse to their first
    /// occurrence and the survivors are re-ordered to the active sort key.
    pub fn apply_page(&mut self, projects: Vec<Project>, total_count: Option<i64>) {
        let mut seen = HashSet::new();
        let mut projects: Vec<Project> = projects
            .into_iter()
            .filter(|project| seen.insert(project.id))
            .collect();
        sort_for(&mut projects, self.filters.sort);
        self.projects = projects;
        self.total_count = total_count;
        self.loading = false;
        self.loaded = true;
    }

    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.loaded = true;
        self.error = Some(message);
    }

    /// Edit filters through one choke point; any change returns to page 1.
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut ProjectFilters)) {
        edit(&mut self.filters);
        self.page = 1;
    }

    /// One-click reset: every filter default, back to page 1.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.page = 1;
    }

    /// Move within `[1, total_pages]`.
    pub fn set_page(&mut self, page: i64) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Page count from the server total; at least one page.
    #[must_use]
    pub fn total_pages(&self) -> i64 {
        match self.total_count {
            Some(count) if count > 0 => (count + PAGE_SIZE - 1) / PAGE_SIZE,
            _ => 1,
        }
    }

    /// Query pairs for the current filters and page.
    #[must_use]
    pub fn query(&self) -> Vec<(String, String)> {
        self.filters.query_pairs(self.page)
    }

    /// True once a load finished with nothing to show.
    #[must_use]
    pub fn no_results(&self) -> bool {
        self.loaded && !self.loading && self.error.is_none() && self.projects.is_empty()
    }
}

/// Normalize a page to the active sort key. Stable, so server order
/// survives among ties.
fn sort_for(projects: &mut [Project], sort: SortKey) {
    match sort {
        SortKey::Latest => projects.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Popular => {
            projects.sort_by(|a, b| b.raised_amount().total_cmp(&a.raised_amount()));
        }
        SortKey::Rating => {
            projects.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
        }
        SortKey::Ending => {
            projects.sort_by_key(|project| project.end_time.unwrap_or(DateTime::<Utc>::MAX_UTC));
        }
    }
}

/// Fetch the current page into the signal-wrapped state.
pub async fn load_page(state: RwSignal<ListingState>, api: &Api, abort: &FetchAbort) {
    let query = state.with_untracked(ListingState::query);
    state.update(ListingState::begin_load);
    match api.list_projects(&query, abort).await {
        Ok((projects, total_count)) => {
            state.update(|listing| listing.apply_page(projects, total_count));
        }
        Err(err) if err.is_abort() => {}
        Err(err) => state.update(|listing| listing.apply_error(err.to_string())),
    }
}

//! Homepage state: the three curated strips, fetched in one call.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::types::HomepageData;
use crate::util::abort::FetchAbort;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeState {
    pub data: HomepageData,
    pub loading: bool,
    pub error: Option<String>,
}

impl HomeState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Each strip defaults independently, so a partial payload still
    /// renders whatever arrived.
    pub fn apply_data(&mut self, data: HomepageData) {
        self.data = data;
        self.loading = false;
    }

    /// A failed refresh keeps whatever strips are already on screen.
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Fetch the curated strips.
pub async fn load_home(state: RwSignal<HomeState>, api: &Api, abort: &FetchAbort) {
    state.update(HomeState::begin_load);
    match api.homepage_data(abort).await {
        Ok(data) => state.update(|home| home.apply_data(data)),
        Err(err) if err.is_abort() => {}
        Err(err) => state.update(|home| home.apply_error(err.to_string())),
    }
}

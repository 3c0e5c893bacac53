//! Campaign endpoints: listing, create/edit/delete, and the per-campaign
//! actions (donate, rate, similar, cancel, report).

#[cfg(test)]
#[path = "api_projects_test.rs"]
mod api_projects_test;

use serde::Serialize;

use super::api::{Api, UploadFile};
use super::error::ApiError;
use super::types::{
    Ack, CancelResponse, DonateResponse, HomepageData, ListBody, Project, RateResponse,
    SimilarProjects,
};
use crate::forms::campaign::{CampaignPayload, image_removal_fields};
use crate::forms::donate::DonationPayload;
use crate::forms::report::ReportPayload;
use crate::util::abort::FetchAbort;

/// Star ratings are whole numbers from 1 to 5.
#[must_use]
pub fn valid_rating(value: u8) -> bool {
    (1..=5).contains(&value)
}

impl Api {
    /// One page of campaigns under the given query pairs.
    ///
    /// Returns the items plus the server's total count when the body was a
    /// pagination envelope.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn list_projects(
        &self,
        query: &[(String, String)],
        abort: &FetchAbort,
    ) -> Result<(Vec<Project>, Option<i64>), ApiError> {
        let body: ListBody<Project> = self.get_json_query("projects/", query, abort).await?;
        Ok(body.into_parts())
    }

    /// Create a campaign from assembled field pairs plus image files.
    /// `image_0` is the main picture.
    ///
    /// # Errors
    /// [`ApiError::Validation`] with the server's per-field messages.
    pub async fn create_project(
        &self,
        payload: &CampaignPayload,
        images: &[UploadFile],
        abort: &FetchAbort,
    ) -> Result<Project, ApiError> {
        let files = image_parts(images);
        self.post_multipart("projects/", &payload.fields, &files, abort)
            .await
    }

    /// Full detail for one campaign.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn project_detail(&self, id: i64, abort: &FetchAbort) -> Result<Project, ApiError> {
        self.get_json(&project_path(id), abort).await
    }

    /// Update an owned campaign. `removed_picture_ids` become removal
    /// markers alongside any newly attached image files.
    ///
    /// # Errors
    /// [`ApiError::Validation`] with the server's per-field messages.
    pub async fn update_project(
        &self,
        id: i64,
        payload: &CampaignPayload,
        images: &[UploadFile],
        removed_picture_ids: &[i64],
        abort: &FetchAbort,
    ) -> Result<Project, ApiError> {
        let mut fields = payload.fields.clone();
        fields.extend(image_removal_fields(removed_picture_ids));
        let files = image_parts(images);
        self.put_multipart(&project_path(id), &fields, &files, abort)
            .await
    }

    /// Delete an owned campaign outright.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn delete_project(&self, id: i64, abort: &FetchAbort) -> Result<(), ApiError> {
        self.delete(&project_path(id), abort).await
    }

    /// Donate to a campaign. The response carries the refreshed campaign
    /// so callers never do local arithmetic.
    ///
    /// # Errors
    /// [`ApiError::Message`] with the server's refusal text.
    pub async fn donate(
        &self,
        id: i64,
        payload: &DonationPayload,
        abort: &FetchAbort,
    ) -> Result<DonateResponse, ApiError> {
        self.post_json(&action_path(id, "donate"), payload, abort)
            .await
    }

    /// Submit a 1-5 star rating; the response carries the new aggregate.
    ///
    /// # Errors
    /// [`ApiError::Message`] with the server's refusal text.
    pub async fn rate(
        &self,
        id: i64,
        rating: u8,
        abort: &FetchAbort,
    ) -> Result<RateResponse, ApiError> {
        self.post_json(&action_path(id, "rate"), &RatingPayload { rating }, abort)
            .await
    }

    /// Tag-based similar-campaign strip for the detail page.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn similar_projects(
        &self,
        id: i64,
        abort: &FetchAbort,
    ) -> Result<SimilarProjects, ApiError> {
        self.get_json(&action_path(id, "similar"), abort).await
    }

    /// The three curated homepage strips in one call.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn homepage_data(&self, abort: &FetchAbort) -> Result<HomepageData, ApiError> {
        self.get_json("projects/homepage_data/", abort).await
    }

    /// Cancel an owned campaign. The server enforces the under-25%-funded
    /// rule and refuses with an explanation otherwise.
    ///
    /// # Errors
    /// [`ApiError::Message`] with the server's refusal text.
    pub async fn cancel_project(
        &self,
        id: i64,
        reason: &str,
        abort: &FetchAbort,
    ) -> Result<CancelResponse, ApiError> {
        self.post_json(&action_path(id, "cancel"), &CancelPayload { reason }, abort)
            .await
    }

    /// Report a campaign.
    ///
    /// # Errors
    /// [`ApiError::Message`] when the server rejects the report, for
    /// example on a duplicate.
    pub async fn report_project(
        &self,
        id: i64,
        payload: &ReportPayload,
        abort: &FetchAbort,
    ) -> Result<Ack, ApiError> {
        self.post_json(&action_path(id, "report"), payload, abort)
            .await
    }
}

#[derive(Serialize)]
struct RatingPayload {
    rating: u8,
}

#[derive(Serialize)]
struct CancelPayload<'a> {
    reason: &'a str,
}

fn project_path(id: i64) -> String {
    format!("projects/{id}/")
}

fn action_path(id: i64, action: &str) -> String {
    format!("projects/{id}/{action}/")
}

fn image_parts(images: &[UploadFile]) -> Vec<(String, UploadFile)> {
    images
        .iter()
        .enumerate()
        .map(|(index, file)| (format!("image_{index}"), file.clone()))
        .collect()
}

//! Auth and account endpoints: login, registration, profile, and the
//! signed-in user's dashboard data.

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use serde::Serialize;

use super::api::{Api, UploadFile};
use super::error::ApiError;
use super::types::{DonationRecord, ListBody, LoginResponse, OwnedProject, User};
use crate::forms::profile::ProfilePayload;
use crate::forms::register::RegisterPayload;
use crate::util::abort::FetchAbort;

/// Credentials for [`Api::login`].
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Api {
    /// Exchange credentials for a token and user snapshot.
    ///
    /// # Errors
    /// [`ApiError::Message`] with the server's text (for example
    /// "Invalid credentials") when the login is rejected.
    pub async fn login(
        &self,
        credentials: &Credentials,
        abort: &FetchAbort,
    ) -> Result<LoginResponse, ApiError> {
        self.post_json("auth/login/", credentials, abort).await
    }

    /// Create an account. The server signs the new user in and answers
    /// with the same token-and-user shape as [`Api::login`].
    ///
    /// # Errors
    /// [`ApiError::Validation`] carrying the server's per-field messages.
    pub async fn register(
        &self,
        payload: &RegisterPayload,
        abort: &FetchAbort,
    ) -> Result<LoginResponse, ApiError> {
        self.post_json("auth/register/", payload, abort).await
    }

    /// Fetch the signed-in user's profile. Doubles as the token-validation
    /// probe at startup.
    ///
    /// # Errors
    /// Any failure here means "not authenticated" to callers.
    pub async fn current_user(&self, abort: &FetchAbort) -> Result<User, ApiError> {
        self.get_json("auth/profile/", abort).await
    }

    /// Update the signed-in user's profile. Multipart so a replacement
    /// picture can ride along with the text fields.
    ///
    /// # Errors
    /// [`ApiError::Validation`] with the server's per-field messages.
    pub async fn update_profile(
        &self,
        payload: &ProfilePayload,
        picture: Option<UploadFile>,
        abort: &FetchAbort,
    ) -> Result<User, ApiError> {
        let files = picture_parts(picture);
        self.put_multipart("auth/profile/", &payload.fields, &files, abort)
            .await
    }

    /// Campaigns owned by the signed-in user.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn my_projects(&self, abort: &FetchAbort) -> Result<Vec<OwnedProject>, ApiError> {
        let body: ListBody<OwnedProject> = self.get_json("auth/my-projects/", abort).await?;
        Ok(body.into_parts().0)
    }

    /// Donation history for the signed-in user.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn my_donations(&self, abort: &FetchAbort) -> Result<Vec<DonationRecord>, ApiError> {
        let body: ListBody<DonationRecord> = self.get_json("auth/my-donations/", abort).await?;
        Ok(body.into_parts().0)
    }
}

fn picture_parts(picture: Option<UploadFile>) -> Vec<(String, UploadFile)> {
    picture
        .into_iter()
        .map(|file| ("profile_picture".to_owned(), file))
        .collect()
}

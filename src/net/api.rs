//! Configured API wrapper: base URL, auth header, abort wiring, and the
//! global 401 policy.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call funnels through one resolve path: transport failures map to
//! `Network` (or `Aborted` when this view cancelled the request), a 401
//! tears the session down before callers see anything, and other non-2xx
//! bodies decode into banner text or field maps. Callers cannot opt out of
//! the 401 policy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use super::error::ApiError;
use crate::util::abort::FetchAbort;

#[cfg(feature = "hydrate")]
use super::error::error_from_response;
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Default base path when the wrapper is not configured otherwise.
pub const DEFAULT_API_BASE: &str = "/api";

/// Browser file handle attached to multipart uploads.
#[cfg(feature = "hydrate")]
pub type UploadFile = web_sys::File;

/// Placeholder so upload signatures stay uniform on native builds.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug)]
pub struct UploadFile;

/// The session surface the wrapper needs: a current token and a way to
/// report that the server rejected it. Injectable so tests construct a
/// fresh one with no global state.
pub trait SessionHook {
    /// Current session token, if one exists.
    fn token(&self) -> Option<String>;
    /// Called on any 401; implementations clear the session and redirect
    /// to the login entry point.
    fn on_unauthorized(&self);
}

/// A configured HTTP client for the crowdfunding API.
#[derive(Clone)]
pub struct Api {
    base: String,
    session: Rc<dyn SessionHook>,
}

impl Api {
    /// Build a wrapper from a base URL (trailing slashes dropped) and the
    /// session hook consulted on every call.
    pub fn new(base: impl Into<String>, session: Rc<dyn SessionHook>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base, session }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_header_value(token: &str) -> String {
    format!("Token {token}")
}

/// Apply the global 401 policy. Returns whether the response was a 401.
#[cfg(any(test, feature = "hydrate"))]
fn check_unauthorized(status: u16, session: &dyn SessionHook) -> bool {
    if status == 401 {
        session.on_unauthorized();
        return true;
    }
    false
}

#[cfg(feature = "hydrate")]
impl Api {
    fn apply_common(&self, builder: RequestBuilder, abort: &FetchAbort) -> RequestBuilder {
        let builder = builder.abort_signal(abort.signal());
        match self.session.token() {
            Some(token) => builder.header("Authorization", &auth_header_value(&token)),
            None => builder,
        }
    }

    async fn resolve(
        &self,
        sent: Result<Response, gloo_net::Error>,
        abort: &FetchAbort,
    ) -> Result<Response, ApiError> {
        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                if abort.is_aborted() {
                    return Err(ApiError::Aborted);
                }
                return Err(ApiError::Network(err.to_string()));
            }
        };
        if check_unauthorized(response.status(), self.session.as_ref()) {
            log::warn!("api: 401 received, session cleared");
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status, &body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        log::debug!("api: GET {path}");
        let sent = self
            .apply_common(Request::get(&self.url(path)), abort)
            .send()
            .await;
        let response = self.resolve(sent, abort).await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        log::debug!("api: GET {path} ({} params)", query.len());
        let builder = Request::get(&self.url(path))
            .query(query.iter().map(|(key, value)| (key.as_str(), value.as_str())));
        let sent = self.apply_common(builder, abort).send().await;
        let response = self.resolve(sent, abort).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        log::debug!("api: POST {path}");
        let request = self
            .apply_common(Request::post(&self.url(path)), abort)
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = self.resolve(request.send().await, abort).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        log::debug!("api: PUT {path}");
        let request = self
            .apply_common(Request::put(&self.url(path)), abort)
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = self.resolve(request.send().await, abort).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str, abort: &FetchAbort) -> Result<(), ApiError> {
        log::debug!("api: DELETE {path}");
        let sent = self
            .apply_common(Request::delete(&self.url(path)), abort)
            .send()
            .await;
        self.resolve(sent, abort).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(String, String)],
        files: &[(String, UploadFile)],
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        log::debug!("api: POST {path} (multipart)");
        self.send_multipart(Request::post(&self.url(path)), fields, files, abort)
            .await
    }

    pub(crate) async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(String, String)],
        files: &[(String, UploadFile)],
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        log::debug!("api: PUT {path} (multipart)");
        self.send_multipart(Request::put(&self.url(path)), fields, files, abort)
            .await
    }

    async fn send_multipart<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fields: &[(String, String)],
        files: &[(String, UploadFile)],
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        let form = build_form_data(fields, files)?;
        // No explicit content-type: the browser supplies the multipart
        // boundary.
        let request = self
            .apply_common(builder, abort)
            .body(form)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = self.resolve(request.send().await, abort).await?;
        Self::decode(response).await
    }
}

#[cfg(feature = "hydrate")]
fn build_form_data(
    fields: &[(String, String)],
    files: &[(String, UploadFile)],
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not assemble form data".to_owned()))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| ApiError::Network("could not assemble form data".to_owned()))?;
    }
    for (name, file) in files {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(|_| ApiError::Network("could not assemble form data".to_owned()))?;
    }
    Ok(form)
}

#[cfg(not(feature = "hydrate"))]
impl Api {
    pub(crate) async fn get_json<T>(&self, path: &str, abort: &FetchAbort) -> Result<T, ApiError> {
        let _ = (path, abort);
        Err(ApiError::Unavailable)
    }

    pub(crate) async fn get_json_query<T>(
        &self,
        path: &str,
        query: &[(String, String)],
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        let _ = (path, query, abort);
        Err(ApiError::Unavailable)
    }

    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        let _ = (path, body, abort);
        Err(ApiError::Unavailable)
    }

    pub(crate) async fn put_json<B, T>(
        &self,
        path: &str,
        body: &B,
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        let _ = (path, body, abort);
        Err(ApiError::Unavailable)
    }

    pub(crate) async fn delete(&self, path: &str, abort: &FetchAbort) -> Result<(), ApiError> {
        let _ = (path, abort);
        Err(ApiError::Unavailable)
    }

    pub(crate) async fn post_multipart<T>(
        &self,
        path: &str,
        fields: &[(String, String)],
        files: &[(String, UploadFile)],
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        let _ = (path, fields, files, abort);
        Err(ApiError::Unavailable)
    }

    pub(crate) async fn put_multipart<T>(
        &self,
        path: &str,
        fields: &[(String, String)],
        files: &[(String, UploadFile)],
        abort: &FetchAbort,
    ) -> Result<T, ApiError> {
        let _ = (path, fields, files, abort);
        Err(ApiError::Unavailable)
    }
}

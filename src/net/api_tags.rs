//! Tag endpoints.

use super::api::Api;
use super::error::ApiError;
use super::types::{ListBody, Tag, TagSearch};
use crate::util::abort::FetchAbort;

impl Api {
    /// All tags.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn tags(&self, abort: &FetchAbort) -> Result<Vec<Tag>, ApiError> {
        let body: ListBody<Tag> = self.get_json("tags/", abort).await?;
        Ok(body.into_parts().0)
    }

    /// Tags matching a free-text term, for the tag picker.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn search_tags(
        &self,
        term: &str,
        abort: &FetchAbort,
    ) -> Result<TagSearch, ApiError> {
        let query = [("q".to_owned(), term.to_owned())];
        self.get_json_query("tags/search/", &query, abort).await
    }

    /// Most-used tags.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn popular_tags(&self, abort: &FetchAbort) -> Result<Vec<Tag>, ApiError> {
        let body: ListBody<Tag> = self.get_json("tags/popular/", abort).await?;
        Ok(body.into_parts().0)
    }
}

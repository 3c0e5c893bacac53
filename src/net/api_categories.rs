//! Category endpoints.

use super::api::Api;
use super::error::ApiError;
use super::types::{Category, CategoryWithProjects, ListBody, Project};
use crate::util::abort::FetchAbort;

impl Api {
    /// All categories, for filter dropdowns and the create form.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn categories(&self, abort: &FetchAbort) -> Result<Vec<Category>, ApiError> {
        let body: ListBody<Category> = self.get_json("categories/", abort).await?;
        Ok(body.into_parts().0)
    }

    /// Categories bundled with their campaigns, for browse views.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn categories_with_projects(
        &self,
        abort: &FetchAbort,
    ) -> Result<Vec<CategoryWithProjects>, ApiError> {
        let body: ListBody<CategoryWithProjects> =
            self.get_json("categories/with-projects/", abort).await?;
        Ok(body.into_parts().0)
    }

    /// Campaigns under one category slug.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn category_projects(
        &self,
        slug: &str,
        abort: &FetchAbort,
    ) -> Result<Vec<Project>, ApiError> {
        let body: ListBody<Project> = self
            .get_json(&format!("categories/{slug}/projects/"), abort)
            .await?;
        Ok(body.into_parts().0)
    }
}

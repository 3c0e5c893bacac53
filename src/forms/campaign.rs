//! Campaign create/edit form draft, validation, and multipart field pairs.
//!
//! DESIGN
//! ======
//! The draft holds raw input exactly as typed (dates and the goal stay
//! strings) so partially filled forms never lose keystrokes. `validate`
//! produces plain field/value pairs; the transport layer turns them into a
//! multipart body and appends the image parts, keeping everything here
//! natively testable.

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

use chrono::{NaiveDate, NaiveTime};

use super::field_errors::FieldErrors;

/// Shortest accepted narrative, measured after trimming.
pub const MIN_NARRATIVE_CHARS: usize = 100;

/// Smallest accepted funding goal in currency units.
pub const MIN_FUNDING_GOAL: f64 = 100.0;

/// A campaign must run at least this many whole days.
pub const MIN_CAMPAIGN_DAYS: i64 = 7;

/// Fewest images accepted: one main plus two additional.
pub const MIN_IMAGES: usize = 3;

/// Most images accepted; extras beyond this are dropped at intake.
pub const MAX_IMAGES: usize = 5;

/// In-progress campaign input for both create and edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignDraft {
    pub title: String,
    pub details: String,
    pub goal: String,
    pub category: Option<i64>,
    pub start_date: String,
    pub end_date: String,
    pub tags: Vec<String>,
    pub featured: bool,
    image_names: Vec<String>,
}

/// Multipart field pairs for `POST projects/` and `PUT projects/{id}/`.
/// Image parts (`image_0`..) and, for edits, removal markers ride along at
/// the transport layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignPayload {
    pub fields: Vec<(String, String)>,
}

impl CampaignDraft {
    /// Add a tag if it is non-empty after trimming and not already present.
    /// Returns whether the tag was added.
    pub fn push_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    /// Remove a tag by exact value.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|existing| existing != tag);
    }

    /// Replace the chosen images, keeping at most [`MAX_IMAGES`] names.
    pub fn set_image_names(&mut self, mut names: Vec<String>) {
        names.truncate(MAX_IMAGES);
        self.image_names = names;
    }

    /// Names of the currently chosen images.
    #[must_use]
    pub fn image_names(&self) -> &[String] {
        &self.image_names
    }

    /// Check every field and either produce the wire field pairs or the
    /// full per-field error map.
    ///
    /// # Errors
    ///
    /// Returns the error map when any field fails; all failing fields are
    /// reported at once.
    pub fn validate(&self) -> Result<CampaignPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.set("title", "Title is required");
        }

        let details = self.details.trim();
        if details.is_empty() {
            errors.set("details", "Details are required");
        } else if details.chars().count() < MIN_NARRATIVE_CHARS {
            errors.set("details", "Details must be at least 100 characters");
        }

        let goal = self.parsed_goal(&mut errors);

        if self.category.is_none() {
            errors.set("category", "Select a category");
        }

        let start = parse_date_field(&self.start_date, "start_time", "Start", &mut errors);
        let end = parse_date_field(&self.end_date, "end_time", "End", &mut errors);
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.set("end_time", "End date must be after the start date");
            } else if (end - start).num_days() < MIN_CAMPAIGN_DAYS {
                errors.set("end_time", "Campaign must run for at least 7 days");
            }
        }

        match self.image_names.len() {
            0 => errors.set("images", "Add at least one image"),
            n if n < MIN_IMAGES => {
                errors.set("images", "Add at least 3 images (1 main + 2 additional)");
            }
            _ => {}
        }

        if self.tags.is_empty() {
            errors.set("tags", "Add at least one tag");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // Every Option below is Some once errors is empty.
        let mut fields = vec![
            ("title".to_owned(), title.to_owned()),
            ("details".to_owned(), details.to_owned()),
        ];
        if let Some(goal) = goal {
            fields.push(("total_target".to_owned(), format!("{goal}")));
        }
        if let Some(category) = self.category {
            fields.push(("category".to_owned(), category.to_string()));
        }
        if let Some(start) = start {
            fields.push(("start_time".to_owned(), wire_datetime(start)));
        }
        if let Some(end) = end {
            fields.push(("end_time".to_owned(), wire_datetime(end)));
        }
        fields.push((
            "is_featured".to_owned(),
            if self.featured { "true" } else { "false" }.to_owned(),
        ));
        for (index, tag) in self.tags.iter().enumerate() {
            fields.push((format!("tags[{index}]"), tag.clone()));
        }
        Ok(CampaignPayload { fields })
    }

    fn parsed_goal(&self, errors: &mut FieldErrors) -> Option<f64> {
        let raw = self.goal.trim();
        if raw.is_empty() {
            errors.set("total_target", "Funding goal is required");
            return None;
        }
        let Ok(goal) = raw.parse::<f64>() else {
            errors.set("total_target", "Enter a valid amount");
            return None;
        };
        if !goal.is_finite() || goal < MIN_FUNDING_GOAL {
            errors.set("total_target", "Minimum funding goal is 100");
            return None;
        }
        Some(goal)
    }
}

/// Removal markers for images dropped while editing: `delete_image_0`..
#[must_use]
pub fn image_removal_fields(picture_ids: &[i64]) -> Vec<(String, String)> {
    picture_ids
        .iter()
        .enumerate()
        .map(|(index, id)| (format!("delete_image_{index}"), id.to_string()))
        .collect()
}

fn parse_date_field(
    raw: &str,
    field: &'static str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.set(field, format!("{label} date is required"));
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.set(field, format!("Enter a valid {} date", label.to_lowercase()));
            None
        }
    }
}

/// Date inputs are plain days; the wire wants a timestamp, so send
/// midnight UTC.
fn wire_datetime(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().to_rfc3339()
}

/// Collect up to [`MAX_IMAGES`] files from a file input.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn collect_files(list: &web_sys::FileList) -> Vec<web_sys::File> {
    let count = (list.length() as usize).min(MAX_IMAGES);
    (0..count).filter_map(|i| list.item(i as u32)).collect()
}

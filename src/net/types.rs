//! Wire DTOs for the crowdfunding REST API.
//!
//! DESIGN
//! ======
//! The server serializes decimals as JSON strings in some payloads and
//! numbers in others, sends references either as bare ids or expanded
//! objects depending on the endpoint, and wraps lists in a pagination
//! envelope only when the view paginates. Every field beyond an entity's
//! identity therefore defaults, and the deserializers at the bottom accept
//! each observed shape, so serializer drift never fails a whole page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Owner/author reference embedded in campaign payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBrief {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Avatar URL, under either name the server uses for it.
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

impl UserBrief {
    /// Avatar URL regardless of which field the serializer populated.
    #[must_use]
    pub fn picture(&self) -> Option<&str> {
        self.profile_picture_url
            .as_deref()
            .or(self.profile_picture.as_deref())
    }
}

/// The authenticated user's full profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub mobile_phone: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    /// Plain `YYYY-MM-DD`, edited as text in the profile form.
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub facebook_profile: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub projects_count: i64,
    #[serde(default)]
    pub donations_count: i64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub total_donated: f64,
    #[serde(default, deserialize_with = "deserialize_opt_datetime")]
    pub date_joined: Option<DateTime<Utc>>,
}

impl User {
    /// Name to show in chrome: the server's `full_name` when present,
    /// otherwise first + last.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = self.full_name.trim();
        if !full.is_empty() {
            return full.to_owned();
        }
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}

/// Campaign category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub projects_count: i64,
}

/// Campaign tag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub projects_count: i64,
}

/// One uploaded campaign image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPicture {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "deserialize_opt_datetime")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// A campaign as returned by list, detail, homepage, and similar payloads.
///
/// Aggregates (`total_donations`, `average_rating`, counts) are
/// server-computed and read-only here; the client refreshes them from
/// responses, never recomputes them locally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub total_target: f64,
    /// Raised amount under the list serializer's name.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub total_donations: f64,
    /// Raised amount under the detail serializer's name.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub current_amount: f64,
    #[serde(default, deserialize_with = "deserialize_category_ref")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "deserialize_tag_list")]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub pictures: Vec<ProjectPicture>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub average_rating: f64,
    #[serde(default)]
    pub ratings_count: i64,
    #[serde(default)]
    pub donations_count: i64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "deserialize_opt_datetime")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_opt_datetime")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    /// Owner as a bare id or object, list-serializer name.
    #[serde(default, deserialize_with = "deserialize_user_ref")]
    pub owner: Option<UserBrief>,
    /// Owner object under the detail serializer's name.
    #[serde(default, deserialize_with = "deserialize_user_ref")]
    pub user: Option<UserBrief>,
}

impl Project {
    /// Raised amount regardless of which serializer produced the payload.
    #[must_use]
    pub fn raised_amount(&self) -> f64 {
        self.total_donations.max(self.current_amount)
    }

    /// Raised over target, `0.0` when the target is unset.
    #[must_use]
    pub fn funding_fraction(&self) -> f64 {
        if self.total_target > 0.0 {
            self.raised_amount() / self.total_target
        } else {
            0.0
        }
    }

    /// Progress bar percentage, clamped at 100.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        (self.funding_fraction() * 100.0).min(100.0)
    }

    /// Whole days until the campaign ends, never negative; a partial day
    /// counts as one.
    #[must_use]
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        let Some(end) = self.end_time else { return 0 };
        let seconds = (end - now).num_seconds();
        if seconds <= 0 {
            return 0;
        }
        (seconds + 86_399) / 86_400
    }

    /// First uploaded image, the card/main picture.
    #[must_use]
    pub fn main_picture(&self) -> Option<&str> {
        self.pictures.first().map(|picture| picture.image.as_str())
    }

    /// Owner reference from whichever field the serializer populated.
    #[must_use]
    pub fn owner_ref(&self) -> Option<&UserBrief> {
        self.user.as_ref().or(self.owner.as_ref())
    }
}

/// Dashboard row for one of the signed-in user's own campaigns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnedProject {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub total_target: f64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub current_amount: f64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub funding_percentage: f64,
    #[serde(default, deserialize_with = "deserialize_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_opt_datetime")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub main_picture: Option<String>,
}

/// Dashboard row for one donation the signed-in user made.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub project_title: String,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub amount: f64,
    #[serde(default, deserialize_with = "deserialize_opt_datetime")]
    pub donation_date: Option<DateTime<Utc>>,
}

/// One comment from the flat per-campaign list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    /// Author id; some serializers expand this to an object.
    #[serde(default, deserialize_with = "deserialize_author_id")]
    pub user: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub parent: Option<i64>,
    #[serde(default)]
    pub replies_count: i64,
    #[serde(default)]
    pub is_reply: bool,
    /// Server-set moderation flag; flagged comments render de-emphasized
    /// and non-interactive but stay visible.
    #[serde(default)]
    pub is_flagged: bool,
    #[serde(default)]
    pub reports_count: i64,
}

/// Body of a successful `POST auth/login/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Curated homepage strips; each defaults independently so a partial
/// payload still renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomepageData {
    #[serde(default)]
    pub top_rated: Vec<Project>,
    #[serde(default)]
    pub latest: Vec<Project>,
    #[serde(default)]
    pub featured: Vec<Project>,
}

/// Body of `GET projects/{id}/similar/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarProjects {
    #[serde(default)]
    pub similar_projects: Vec<Project>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub project_tags: Vec<String>,
    #[serde(default)]
    pub message: String,
}

/// Body of a successful donation; carries the refreshed campaign.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DonateResponse {
    #[serde(default)]
    pub donation: Option<DonationRecord>,
    #[serde(default)]
    pub project: Option<Project>,
}

/// Body of a successful rating; carries the refreshed aggregate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateResponse {
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub project_average_rating: f64,
    #[serde(default)]
    pub project_total_ratings: i64,
}

/// Body of a successful cancellation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub funding_percentage: f64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub total_raised: f64,
}

/// Bare `{message}` acknowledgment returned by the report endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// Body of `GET tags/search/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSearch {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub count: i64,
}

/// One category bundled with its campaigns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryWithProjects {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A list body that is either a DRF pagination envelope or a bare array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Paginated(Paginated<T>),
    Plain(Vec<T>),
}

/// DRF pagination envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> ListBody<T> {
    /// Items plus the server's total count when the body was paginated.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<i64>) {
        match self {
            ListBody::Paginated(page) => (page.results, Some(page.count)),
            ListBody::Plain(items) => (items, None),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Parse the timestamp shapes the server emits: RFC 3339 (with or without
/// fractional seconds) or a naive `YYYY-MM-DDTHH:MM:SS`, taken as UTC.
#[must_use]
pub(crate) fn parse_wire_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_opt_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(raw) => parse_wire_datetime(&raw),
        _ => None,
    })
}

/// Decimal fields arrive as numbers, decimal strings, or null.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(number) => Ok(number.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected decimal string, got {text:?}"))),
        other => Err(D::Error::custom(format!("expected decimal, got {other}"))),
    }
}

/// Category fields arrive as null, a bare id, a slug/name string, or an
/// expanded object.
fn deserialize_category_ref<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_i64().map(|id| Category {
            id,
            ..Category::default()
        }),
        serde_json::Value::String(name) => Some(Category {
            name,
            ..Category::default()
        }),
        serde_json::Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Owner fields arrive as null, a bare id, or an expanded object.
fn deserialize_user_ref<'de, D>(deserializer: D) -> Result<Option<UserBrief>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_i64().map(|id| UserBrief {
            id,
            ..UserBrief::default()
        }),
        serde_json::Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Tag lists arrive as id arrays, name arrays, or object arrays.
fn deserialize_tag_list<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::Number(number) => number.as_i64().map(|id| Tag {
                id,
                ..Tag::default()
            }),
            serde_json::Value::String(name) => Some(Tag {
                name,
                ..Tag::default()
            }),
            serde_json::Value::Object(_) => serde_json::from_value(item).ok(),
            _ => None,
        })
        .collect())
}

/// Comment authors arrive as a bare id or an expanded object.
fn deserialize_author_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_i64().unwrap_or(0),
        serde_json::Value::Object(map) => map
            .get("id")
            .or_else(|| map.get("pk"))
            .and_then(serde_json::Value::as_i64)
            .unwrap_or(0),
        _ => 0,
    })
}

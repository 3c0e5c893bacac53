use super::*;

fn valid_draft() -> CampaignDraft {
    let mut draft = CampaignDraft {
        title: "Clean Water for Siwa".to_owned(),
        details: "d".repeat(MIN_NARRATIVE_CHARS),
        goal: "5000".to_owned(),
        category: Some(2),
        start_date: "2026-01-01".to_owned(),
        end_date: "2026-02-01".to_owned(),
        tags: vec!["water".to_owned()],
        featured: false,
        ..CampaignDraft::default()
    };
    draft.set_image_names(vec!["main.jpg".to_owned(), "a.jpg".to_owned(), "b.jpg".to_owned()]);
    draft
}

fn field<'a>(payload: &'a CampaignPayload, name: &str) -> Option<&'a str> {
    payload
        .fields
        .iter()
        .find(|(field, _)| field == name)
        .map(|(_, value)| value.as_str())
}

// =============================================================
// Narrative length boundary
// =============================================================

#[test]
fn narrative_under_100_characters_is_blocked() {
    let mut draft = valid_draft();
    draft.details = "d".repeat(MIN_NARRATIVE_CHARS - 1);
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("details"), Some("Details must be at least 100 characters"));
}

#[test]
fn narrative_of_exactly_100_characters_passes() {
    let mut draft = valid_draft();
    draft.details = "d".repeat(MIN_NARRATIVE_CHARS);
    assert!(draft.validate().is_ok());
}

#[test]
fn narrative_length_counts_characters_not_bytes() {
    let mut draft = valid_draft();
    draft.details = "é".repeat(MIN_NARRATIVE_CHARS);
    assert!(draft.validate().is_ok());
}

// =============================================================
// Date window boundary
// =============================================================

#[test]
fn end_six_days_after_start_is_blocked() {
    let mut draft = valid_draft();
    draft.start_date = "2026-01-01".to_owned();
    draft.end_date = "2026-01-07".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("end_time"), Some("Campaign must run for at least 7 days"));
}

#[test]
fn end_exactly_seven_days_after_start_passes() {
    let mut draft = valid_draft();
    draft.start_date = "2026-01-01".to_owned();
    draft.end_date = "2026-01-08".to_owned();
    assert!(draft.validate().is_ok());
}

#[test]
fn end_before_start_gets_the_ordering_message() {
    let mut draft = valid_draft();
    draft.start_date = "2026-01-10".to_owned();
    draft.end_date = "2026-01-05".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("end_time"), Some("End date must be after the start date"));
}

#[test]
fn unparseable_dates_are_field_errors() {
    let mut draft = valid_draft();
    draft.start_date = "01/01/2026".to_owned();
    draft.end_date = String::new();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("start_time"), Some("Enter a valid start date"));
    assert_eq!(errors.get("end_time"), Some("End date is required"));
}

// =============================================================
// Goal boundary
// =============================================================

#[test]
fn goal_below_100_is_blocked() {
    let mut draft = valid_draft();
    draft.goal = "99.99".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("total_target"), Some("Minimum funding goal is 100"));
}

#[test]
fn goal_of_exactly_100_passes() {
    let mut draft = valid_draft();
    draft.goal = "100".to_owned();
    let payload = draft.validate().expect("goal of 100 should pass");
    assert_eq!(field(&payload, "total_target"), Some("100"));
}

#[test]
fn non_numeric_goal_is_blocked() {
    let mut draft = valid_draft();
    draft.goal = "lots".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("total_target"), Some("Enter a valid amount"));
}

// =============================================================
// Images and tags
// =============================================================

#[test]
fn zero_images_and_too_few_images_have_distinct_messages() {
    let mut draft = valid_draft();
    draft.set_image_names(Vec::new());
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("images"), Some("Add at least one image"));

    draft.set_image_names(vec!["main.jpg".to_owned(), "a.jpg".to_owned()]);
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("images"), Some("Add at least 3 images (1 main + 2 additional)"));
}

#[test]
fn image_intake_caps_at_five() {
    let mut draft = valid_draft();
    draft.set_image_names((0..8).map(|i| format!("img{i}.jpg")).collect());
    assert_eq!(draft.image_names().len(), MAX_IMAGES);
    assert!(draft.validate().is_ok());
}

#[test]
fn at_least_one_tag_is_required() {
    let mut draft = valid_draft();
    draft.tags.clear();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("tags"), Some("Add at least one tag"));
}

#[test]
fn push_tag_trims_and_rejects_duplicates() {
    let mut draft = CampaignDraft::default();
    assert!(draft.push_tag("  water  "));
    assert!(!draft.push_tag("water"));
    assert!(!draft.push_tag("   "));
    assert_eq!(draft.tags, vec!["water"]);
    draft.remove_tag("water");
    assert!(draft.tags.is_empty());
}

// =============================================================
// Wire payload assembly
// =============================================================

#[test]
fn payload_carries_every_field_in_wire_form() {
    let mut draft = valid_draft();
    draft.push_tag("desert");
    let payload = draft.validate().expect("valid draft should pass");
    assert_eq!(field(&payload, "title"), Some("Clean Water for Siwa"));
    assert_eq!(field(&payload, "category"), Some("2"));
    assert_eq!(field(&payload, "start_time"), Some("2026-01-01T00:00:00+00:00"));
    assert_eq!(field(&payload, "end_time"), Some("2026-02-01T00:00:00+00:00"));
    assert_eq!(field(&payload, "is_featured"), Some("false"));
    assert_eq!(field(&payload, "tags[0]"), Some("water"));
    assert_eq!(field(&payload, "tags[1]"), Some("desert"));
}

#[test]
fn removal_markers_number_dropped_pictures() {
    let fields = image_removal_fields(&[17, 42]);
    assert_eq!(
        fields,
        vec![
            ("delete_image_0".to_owned(), "17".to_owned()),
            ("delete_image_1".to_owned(), "42".to_owned()),
        ]
    );
}

#[test]
fn every_failing_field_is_reported_in_one_pass() {
    let errors = CampaignDraft::default().validate().unwrap_err();
    for field in ["title", "details", "total_target", "category", "start_time", "end_time", "images", "tags"] {
        assert!(errors.get(field).is_some(), "missing error for {field}");
    }
}

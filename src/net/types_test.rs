use super::*;
use chrono::TimeZone as _;

// =============================================================
// Campaign decoding across serializer shapes
// =============================================================

#[test]
fn detail_shape_decodes_with_decimal_strings_and_expanded_refs() {
    let body = serde_json::json!({
        "id": 7,
        "title": "Clean Water for Siwa",
        "details": "Long narrative",
        "total_target": "5000.00",
        "current_amount": "1500.00",
        "category": {"id": 2, "name": "Environment", "slug": "environment"},
        "tags": [{"id": 1, "name": "water"}, {"id": 4, "name": "desert"}],
        "pictures": [{"id": 11, "image": "/media/main.jpg"}, {"id": 12, "image": "/media/b.jpg"}],
        "average_rating": "4.50",
        "ratings_count": 6,
        "donations_count": 12,
        "is_featured": true,
        "start_time": "2026-01-01T00:00:00Z",
        "end_time": "2026-03-01T00:00:00.500000Z",
        "created_at": "2025-12-20T09:30:00+00:00",
        "user": {"id": 3, "first_name": "Amal", "last_name": "Said"},
        "owner": 3
    });
    let project: Project = serde_json::from_value(body).expect("detail payload decodes");
    assert!((project.total_target - 5000.0).abs() < 1e-9);
    assert!((project.raised_amount() - 1500.0).abs() < 1e-9);
    assert!((project.average_rating - 4.5).abs() < 1e-9);
    assert_eq!(project.category.as_ref().map(|c| c.name.as_str()), Some("Environment"));
    assert_eq!(project.tags.len(), 2);
    assert_eq!(project.main_picture(), Some("/media/main.jpg"));
    let owner = project.owner_ref().expect("owner reference present");
    assert_eq!(owner.first_name, "Amal");
    assert!(project.is_active, "is_active defaults to true when missing");
}

#[test]
fn list_shape_decodes_with_numeric_amounts_and_bare_ids() {
    let body = serde_json::json!({
        "id": 9,
        "title": "Community Library",
        "total_target": 2000,
        "total_donations": 300.5,
        "category": null,
        "tags": [1, 4],
        "owner": 3
    });
    let project: Project = serde_json::from_value(body).expect("list payload decodes");
    assert!((project.raised_amount() - 300.5).abs() < 1e-9);
    assert!(project.category.is_none());
    assert_eq!(project.tags.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 4]);
    assert_eq!(project.owner_ref().map(|o| o.id), Some(3));
}

#[test]
fn decimal_string_and_number_decode_equal() {
    let from_string: Project =
        serde_json::from_value(serde_json::json!({"id": 1, "total_target": "1500.00"}))
            .expect("string target decodes");
    let from_number: Project =
        serde_json::from_value(serde_json::json!({"id": 1, "total_target": 1500.0}))
            .expect("numeric target decodes");
    assert!((from_string.total_target - from_number.total_target).abs() < f64::EPSILON);
}

#[test]
fn null_rating_decodes_to_zero() {
    let project: Project =
        serde_json::from_value(serde_json::json!({"id": 1, "average_rating": null}))
            .expect("null rating decodes");
    assert!((project.average_rating - 0.0).abs() < f64::EPSILON);
}

// =============================================================
// Display math
// =============================================================

#[test]
fn progress_clamps_at_one_hundred() {
    let project = Project {
        total_target: 100.0,
        total_donations: 250.0,
        ..Project::default()
    };
    assert!((project.progress_percent() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn unset_target_means_zero_progress() {
    let project = Project {
        total_donations: 250.0,
        ..Project::default()
    };
    assert!((project.progress_percent() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn days_remaining_rounds_partial_days_up_and_floors_at_zero() {
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let mut project = Project {
        end_time: Some(Utc.with_ymd_and_hms(2026, 1, 3, 0, 0, 0).unwrap()),
        ..Project::default()
    };
    assert_eq!(project.days_remaining(now), 2);

    project.end_time = Some(Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap());
    assert_eq!(project.days_remaining(now), 0);

    project.end_time = None;
    assert_eq!(project.days_remaining(now), 0);
}

// =============================================================
// Envelope-or-array lists
// =============================================================

#[test]
fn paginated_envelope_and_bare_array_yield_the_same_items() {
    let envelope = serde_json::json!({
        "count": 25,
        "next": "/api/projects/?page=2",
        "previous": null,
        "results": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]
    });
    let bare = serde_json::json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]);

    let (enveloped, total) =
        serde_json::from_value::<ListBody<Project>>(envelope).expect("envelope decodes").into_parts();
    let (plain, no_total) =
        serde_json::from_value::<ListBody<Project>>(bare).expect("array decodes").into_parts();

    assert_eq!(total, Some(25));
    assert_eq!(no_total, None);
    assert_eq!(enveloped.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(plain.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
}

// =============================================================
// Comments, sessions, homepage
// =============================================================

#[test]
fn comment_defaults_cover_missing_moderation_fields() {
    let comment: Comment = serde_json::from_value(serde_json::json!({
        "id": 5,
        "content": "great cause",
        "user": {"id": 9},
        "user_name": "Omar",
        "parent": null
    }))
    .expect("comment decodes");
    assert_eq!(comment.user, 9);
    assert!(!comment.is_flagged);
    assert_eq!(comment.reports_count, 0);
    assert_eq!(comment.parent, None);
}

#[test]
fn login_response_carries_token_and_user() {
    let body = serde_json::json!({
        "token": "abc123",
        "user": {"id": 1, "email": "amal@example.com", "first_name": "Amal", "last_name": "Said"}
    });
    let login: LoginResponse = serde_json::from_value(body).expect("login body decodes");
    assert_eq!(login.token, "abc123");
    assert_eq!(login.user.display_name(), "Amal Said");
}

#[test]
fn homepage_strips_default_independently() {
    let data: HomepageData =
        serde_json::from_value(serde_json::json!({"latest": [{"id": 1}]})).expect("partial decodes");
    assert_eq!(data.latest.len(), 1);
    assert!(data.top_rated.is_empty());
    assert!(data.featured.is_empty());
}

#[test]
fn category_with_projects_flattens_category_fields() {
    let body = serde_json::json!({
        "id": 2,
        "name": "Environment",
        "slug": "environment",
        "projects": [{"id": 7, "title": "Clean Water"}]
    });
    let bundle: CategoryWithProjects = serde_json::from_value(body).expect("bundle decodes");
    assert_eq!(bundle.category.slug, "environment");
    assert_eq!(bundle.projects.len(), 1);
}

// =============================================================
// Timestamp parsing
// =============================================================

#[test]
fn wire_datetime_accepts_observed_server_shapes() {
    for raw in [
        "2026-01-01T00:00:00Z",
        "2026-01-01T00:00:00+00:00",
        "2026-01-01T00:00:00.123456Z",
        "2026-01-01T00:00:00",
        "2026-01-01T00:00:00.123456",
    ] {
        assert!(parse_wire_datetime(raw).is_some(), "failed to parse {raw}");
    }
    assert!(parse_wire_datetime("January 1st").is_none());
}

#[test]
fn display_name_falls_back_to_first_and_last() {
    let user = User {
        first_name: "Amal".to_owned(),
        last_name: "Said".to_owned(),
        ..User::default()
    };
    assert_eq!(user.display_name(), "Amal Said");

    let named = User {
        full_name: "Dr. Amal Said".to_owned(),
        ..user
    };
    assert_eq!(named.display_name(), "Dr. Amal Said");
}

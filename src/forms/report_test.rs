use super::*;

#[test]
fn short_description_is_rejected_before_any_network_call() {
    let draft = ReportDraft {
        kind: ReportKind::Spam,
        description: "too short".to_owned(),
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(
        errors.get("description"),
        Some("Please provide a description of at least 10 characters")
    );
}

#[test]
fn whitespace_padding_does_not_rescue_a_short_description() {
    let draft = ReportDraft {
        kind: ReportKind::Fraud,
        description: "   nine ch    ".to_owned(),
    };
    assert!(draft.validate().is_err());
}

#[test]
fn exactly_ten_trimmed_characters_pass() {
    let draft = ReportDraft {
        kind: ReportKind::Other,
        description: "  ten chars.  ".to_owned(),
    };
    let payload = draft.validate().expect("ten characters should pass");
    assert_eq!(payload.description, "ten chars.");
}

#[test]
fn overlong_description_is_rejected() {
    let draft = ReportDraft {
        kind: ReportKind::Harassment,
        description: "x".repeat(MAX_DESCRIPTION_CHARS + 1),
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(
        errors.get("description"),
        Some("Description must be less than 500 characters")
    );
}

#[test]
fn payload_serializes_snake_case_report_type() {
    let draft = ReportDraft {
        kind: ReportKind::InappropriateContent,
        description: "detailed enough description".to_owned(),
    };
    let payload = draft.validate().expect("description is long enough");
    let body = serde_json::to_value(&payload).expect("payload serializes");
    assert_eq!(body["report_type"], "inappropriate_content");
    assert_eq!(body["description"], "detailed enough description");
}

#[test]
fn wire_values_cover_every_kind() {
    let values: Vec<&str> = ReportKind::ALL.iter().map(|k| k.wire_value()).collect();
    assert_eq!(
        values,
        vec!["inappropriate_content", "spam", "fraud", "copyright", "harassment", "other"]
    );
}

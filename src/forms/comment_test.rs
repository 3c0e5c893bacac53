use super::*;

#[test]
fn trimmed_content_under_three_characters_is_rejected() {
    let draft = CommentDraft {
        content: "  ok  ".to_owned(),
        parent: None,
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("content"), Some("Comment must be at least 3 characters"));
}

#[test]
fn exactly_three_characters_pass() {
    let draft = CommentDraft {
        content: "yes".to_owned(),
        parent: None,
    };
    let payload = draft.validate().expect("three characters should pass");
    assert_eq!(payload.content, "yes");
}

#[test]
fn overlong_content_is_rejected() {
    let draft = CommentDraft {
        content: "x".repeat(MAX_CONTENT_CHARS + 1),
        parent: None,
    };
    assert!(draft.validate().is_err());
}

#[test]
fn reply_keeps_its_parent_id() {
    let draft = CommentDraft {
        content: "agreed, backing this one".to_owned(),
        parent: Some(41),
    };
    let payload = draft.validate().expect("reply should validate");
    assert_eq!(payload.parent, Some(41));
}

#[test]
fn root_comment_omits_parent_on_the_wire() {
    let draft = CommentDraft {
        content: "great campaign".to_owned(),
        parent: None,
    };
    let payload = draft.validate().expect("root comment should validate");
    let body = serde_json::to_value(&payload).expect("payload serializes");
    assert!(body.get("parent").is_none());
    assert_eq!(body["content"], "great campaign");
}

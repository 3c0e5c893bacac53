use serde_json::json;

use super::*;

// =============================================================
// Wire payloads
// =============================================================

#[test]
fn credentials_serialize_as_email_and_password() {
    let credentials = Credentials {
        email: "a@b.com".to_owned(),
        password: "hunter22".to_owned(),
    };
    let value = serde_json::to_value(&credentials).expect("serialize");
    assert_eq!(value, json!({"email": "a@b.com", "password": "hunter22"}));
}

// =============================================================
// Multipart parts
// =============================================================

#[test]
fn no_picture_means_no_file_parts() {
    assert!(picture_parts(None).is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn picture_rides_under_the_profile_field() {
    let parts = picture_parts(Some(UploadFile));
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].0, "profile_picture");
}

//! Profile edit form draft and validation.
//!
//! Email is not editable; the server owns account identity. The payload is
//! multipart field pairs because a replacement profile picture may ride
//! along with the text fields.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use chrono::NaiveDate;

use super::field_errors::FieldErrors;
use super::register::is_valid_mobile;

/// In-progress profile edit input. Optional fields stay empty strings when
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub mobile_phone: String,
    pub birthdate: String,
    pub facebook_profile: String,
    pub country: String,
}

/// Multipart field pairs for `PUT auth/profile/`. The transport layer
/// appends the picture part when one was chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfilePayload {
    pub fields: Vec<(String, String)>,
}

impl ProfileDraft {
    /// Check every field and produce the multipart field pairs.
    ///
    /// # Errors
    ///
    /// Returns the error map when a required name is missing or an optional
    /// field is present but malformed.
    pub fn validate(&self) -> Result<ProfilePayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            errors.set("first_name", "First name is required");
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            errors.set("last_name", "Last name is required");
        }

        let mobile = self.mobile_phone.trim();
        if !mobile.is_empty() && !is_valid_mobile(mobile) {
            errors.set("mobile_phone", "Enter a valid mobile number (11 digits starting with 01)");
        }

        let birthdate = self.birthdate.trim();
        if !birthdate.is_empty() && NaiveDate::parse_from_str(birthdate, "%Y-%m-%d").is_err() {
            errors.set("birthdate", "Enter a valid date");
        }

        let facebook = self.facebook_profile.trim();
        if !facebook.is_empty() && !is_valid_link(facebook) {
            errors.set("facebook_profile", "Enter a valid link");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let mut fields = vec![
            ("first_name".to_owned(), first_name.to_owned()),
            ("last_name".to_owned(), last_name.to_owned()),
        ];
        for (name, value) in [
            ("mobile_phone", mobile),
            ("birthdate", birthdate),
            ("facebook_profile", facebook),
            ("country", self.country.trim()),
        ] {
            if !value.is_empty() {
                fields.push((name.to_owned(), value.to_owned()));
            }
        }
        Ok(ProfilePayload { fields })
    }
}

fn is_valid_link(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

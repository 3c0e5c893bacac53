//! Registration form draft and validation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use serde::Serialize;

use super::field_errors::FieldErrors;

/// Minimum password length accepted client-side.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Mobile numbers are 11 digits starting with `01`.
pub const MOBILE_DIGITS: usize = 11;

/// In-progress registration input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_phone: String,
    pub password: String,
    pub password_confirm: String,
}

/// Wire payload for `POST auth/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_phone: String,
    pub password1: String,
    pub password2: String,
}

impl RegisterDraft {
    /// Check every field and either produce the wire payload or the full
    /// per-field error map.
    ///
    /// # Errors
    ///
    /// Returns the error map when any field fails; all failing fields are
    /// reported at once.
    pub fn validate(&self) -> Result<RegisterPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            errors.set("first_name", "First name is required");
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            errors.set("last_name", "Last name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.set("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.set("email", "Enter a valid email address");
        }

        let mobile = self.mobile_phone.trim();
        if mobile.is_empty() {
            errors.set("mobile_phone", "Mobile phone is required");
        } else if !is_valid_mobile(mobile) {
            errors.set("mobile_phone", "Enter a valid mobile number (11 digits starting with 01)");
        }

        if self.password.is_empty() {
            errors.set("password1", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.set("password1", "Password must be at least 8 characters");
        }
        if self.password_confirm != self.password {
            errors.set("password2", "Passwords do not match");
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterPayload {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            mobile_phone: mobile.to_owned(),
            password1: self.password.clone(),
            password2: self.password_confirm.clone(),
        })
    }
}

/// Shape check for email addresses: no whitespace, one `@`, and a dotted
/// domain with text on both sides of the final dot.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Shape check for mobile numbers: exactly 11 ASCII digits starting `01`.
#[must_use]
pub fn is_valid_mobile(mobile: &str) -> bool {
    let mobile = mobile.trim();
    mobile.chars().count() == MOBILE_DIGITS
        && mobile.starts_with("01")
        && mobile.chars().all(|c| c.is_ascii_digit())
}

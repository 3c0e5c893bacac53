//! Donation form draft and validation.

#[cfg(test)]
#[path = "donate_test.rs"]
mod donate_test;

use serde::Serialize;

use super::field_errors::FieldErrors;

/// Smallest accepted donation in currency units.
pub const MIN_DONATION: f64 = 1.0;

/// One-click preset amounts offered next to the free-form input.
pub const QUICK_AMOUNTS: [f64; 5] = [25.0, 50.0, 100.0, 250.0, 500.0];

/// In-progress donation input, kept as raw text until submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DonationDraft {
    pub amount: String,
}

/// Wire payload for `POST projects/{id}/donate/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DonationPayload {
    pub amount: f64,
}

impl DonationDraft {
    /// Parse and bound-check the amount.
    ///
    /// # Errors
    ///
    /// Returns the error map when the amount is missing, not a number, or
    /// under [`MIN_DONATION`].
    pub fn validate(&self) -> Result<DonationPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let raw = self.amount.trim();
        if raw.is_empty() {
            errors.set("amount", "Enter a donation amount");
            return Err(errors);
        }
        let Ok(amount) = raw.parse::<f64>() else {
            errors.set("amount", "Enter a valid amount");
            return Err(errors);
        };
        if !amount.is_finite() || amount < MIN_DONATION {
            errors.set("amount", "Minimum donation is 1");
            return Err(errors);
        }
        Ok(DonationPayload { amount })
    }
}

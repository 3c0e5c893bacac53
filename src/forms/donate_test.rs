use super::*;

#[test]
fn empty_amount_is_rejected() {
    let errors = DonationDraft::default().validate().unwrap_err();
    assert_eq!(errors.get("amount"), Some("Enter a donation amount"));
}

#[test]
fn non_numeric_amount_is_rejected() {
    let draft = DonationDraft {
        amount: "fifty".to_owned(),
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("amount"), Some("Enter a valid amount"));
}

#[test]
fn amount_below_minimum_is_rejected() {
    let draft = DonationDraft {
        amount: "0.5".to_owned(),
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get("amount"), Some("Minimum donation is 1"));
}

#[test]
fn minimum_amount_passes() {
    let draft = DonationDraft {
        amount: "1".to_owned(),
    };
    let payload = draft.validate().expect("minimum donation should pass");
    assert!((payload.amount - 1.0).abs() < f64::EPSILON);
}

#[test]
fn decimal_amounts_parse() {
    let draft = DonationDraft {
        amount: " 49.99 ".to_owned(),
    };
    let payload = draft.validate().expect("decimal amount should pass");
    assert!((payload.amount - 49.99).abs() < 1e-9);
}

#[test]
fn quick_amounts_all_clear_the_minimum() {
    for preset in QUICK_AMOUNTS {
        assert!(preset >= MIN_DONATION);
    }
}

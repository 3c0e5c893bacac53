use super::*;

fn sample_user(id: i64) -> User {
    User {
        id,
        email: "a@b.com".to_owned(),
        first_name: "Sam".to_owned(),
        last_name: "Rivers".to_owned(),
        ..User::default()
    }
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_persists_token_and_user() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();

    apply_login(&mut state, "t1".to_owned(), sample_user(7), &store);

    assert_eq!(store.load().as_deref(), Some("t1"));
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user.as_ref().map(|user| user.id), Some(7));
    assert!(state.is_authenticated());
}

#[test]
fn logout_clears_memory_and_store() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();
    apply_login(&mut state, "t1".to_owned(), sample_user(7), &store);

    apply_logout(&mut state, &store);

    assert_eq!(store.load(), None);
    assert_eq!(state, SessionState::default());
    assert!(!state.is_authenticated());
}

#[test]
fn token_alone_is_not_authenticated() {
    let mut state = SessionState::default();
    apply_bootstrap_started(&mut state, "t1".to_owned());
    assert!(!state.is_authenticated());
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn bootstrap_validates_then_populates() {
    let mut state = SessionState::default();

    apply_bootstrap_started(&mut state, "stored".to_owned());
    assert!(state.validating);
    assert_eq!(state.token.as_deref(), Some("stored"));
    assert_eq!(state.user, None);

    apply_bootstrap_success(&mut state, sample_user(3));
    assert!(!state.validating);
    assert!(state.is_authenticated());
}

#[test]
fn bootstrap_failure_fails_closed() {
    let store = MemoryTokenStore::default();
    store.save("stale");
    let mut state = SessionState::default();
    apply_bootstrap_started(&mut state, "stale".to_owned());

    apply_bootstrap_failure(&mut state, &store);

    assert_eq!(store.load(), None);
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Profile refresh
// =============================================================

#[test]
fn profile_refresh_leaves_token_alone() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();
    apply_login(&mut state, "t1".to_owned(), sample_user(7), &store);

    let mut updated = sample_user(7);
    updated.donations_count = 4;
    apply_profile(&mut state, updated);

    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(store.load().as_deref(), Some("t1"));
    assert_eq!(state.user.as_ref().map(|user| user.donations_count), Some(4));
}

// =============================================================
// Store
// =============================================================

#[test]
fn memory_store_round_trips() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load(), None);
    store.save("abc");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn token_key_is_stable() {
    // The key is the browser-visible storage contract.
    assert_eq!(TOKEN_KEY, "token");
}

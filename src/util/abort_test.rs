use super::*;

#[test]
fn fresh_handle_is_not_aborted() {
    let handle = FetchAbort::new();
    assert!(!handle.is_aborted());
}

#[test]
fn abort_marks_handle() {
    let handle = FetchAbort::new();
    handle.abort();
    assert!(handle.is_aborted());
}

#[test]
fn clones_share_the_abort_flag() {
    let handle = FetchAbort::new();
    let clone = handle.clone();
    handle.abort();
    assert!(clone.is_aborted());
}

use super::*;

#[test]
fn default_is_idle_and_empty() {
    let state = FetchState::<u32>::default();
    assert!(state.data.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn begin_clears_error_and_sets_loading() {
    let mut state = FetchState::<u32>::default();
    state.fail("boom");
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(state.shows_spinner());
}

#[test]
fn failure_keeps_stale_data() {
    let mut state = FetchState::default();
    state.begin();
    state.succeed(42);
    state.begin();
    assert!(!state.shows_spinner());
    state.fail("network down");
    assert_eq!(state.data, Some(42));
    assert_eq!(state.error.as_deref(), Some("network down"));
    assert!(!state.loading);
}

#[test]
fn success_replaces_data() {
    let mut state = FetchState::default();
    state.succeed(1);
    state.succeed(2);
    assert_eq!(state.data, Some(2));
}

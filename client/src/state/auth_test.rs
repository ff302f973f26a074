use super::*;

// =============================================================
// AuthState constructors
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn pending_is_loading_and_signed_out() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.authenticated);
}

#[test]
fn signed_in_carries_user() {
    let user = UserProfile { first_name: "Ada".to_owned(), ..UserProfile::default() };
    let state = AuthState::signed_in(user.clone());
    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.user, Some(user));
}

#[test]
fn display_name_defaults_to_user() {
    assert_eq!(AuthState::signed_out().display_name(), "User");
    let state = AuthState::signed_in(UserProfile { first_name: "Ada".to_owned(), ..UserProfile::default() });
    assert_eq!(state.display_name(), "Ada");
}

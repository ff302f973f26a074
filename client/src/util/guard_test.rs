use super::*;
use crate::net::types::UserProfile;

#[test]
fn should_redirect_unauth_when_not_loading_and_signed_out() {
    assert!(should_redirect_unauth(&AuthState::signed_out()));
}

#[test]
fn should_not_redirect_unauth_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::pending()));
}

#[test]
fn should_not_redirect_unauth_when_signed_in() {
    assert!(!should_redirect_unauth(&AuthState::signed_in(UserProfile::default())));
}

#[test]
fn signed_in_without_profile_still_counts_as_authenticated() {
    let state = AuthState { user: None, authenticated: true, loading: false };
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_authed(&state));
}

#[test]
fn should_redirect_authed_only_when_signed_in() {
    assert!(should_redirect_authed(&AuthState::signed_in(UserProfile::default())));
    assert!(!should_redirect_authed(&AuthState::signed_out()));
    assert!(!should_redirect_authed(&AuthState::pending()));
}

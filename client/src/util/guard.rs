//! Route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages send signed-out visitors to `/login`; the login and
//! register pages send signed-in users on to `/dashboard`. Both decisions are
//! pure predicates over [`AuthState`] so they can be checked without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Signed-out visitor on a protected page, once the stored session was read.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.authenticated
}

/// Signed-in user on a public-only page.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.authenticated
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` whenever a session is present.
pub fn install_authed_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate(DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });
}

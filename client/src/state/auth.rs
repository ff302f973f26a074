//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the session store for rendering. Route guards and the navbar read
//! it; only `auth::context::AuthContext` writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    /// State before the stored session has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    #[must_use]
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user), authenticated: true, loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Greeting name for the navbar.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or(UserProfile::DEFAULT_FIRST_NAME, UserProfile::display_name)
            .to_owned()
    }
}

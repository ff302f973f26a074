//! Login page: email + password against `POST /login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::context::use_auth;
use crate::net::types::LoginCredentials;
use crate::util::guard::{DASHBOARD_ROUTE, install_authed_redirect};

pub(crate) const MISSING_FIELDS: &str = "Enter your email and password.";

/// Shape form input into credentials; the email travels as `username`.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginCredentials { username: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    install_authed_redirect(auth.state(), navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let auth = auth.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth.login(credentials).await {
                Ok(()) => navigate(DASHBOARD_ROUTE, NavigateOptions::default()),
                Err(msg) => error.set(msg),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-container">
                <div class="auth-header">
                    <A href="/" attr:class="auth-logo">"VoiceAI"</A>
                    <h1>"Welcome Back"</h1>
                    <p>"Sign in to your VoiceAI account"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            required
                            placeholder="Enter your email"
                            disabled=move || busy.get()
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            placeholder="Enter your password"
                            disabled=move || busy.get()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </div>

                    <Show when=move || !error.get().is_empty()>
                        <div class="error-message">{move || error.get()}</div>
                    </Show>

                    <button type="submit" class="auth-btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <p>"Don't have an account? " <A href="/register">"Create one here"</A></p>
                </div>
            </div>
        </div>
    }
}

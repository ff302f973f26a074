//! Registration page: account fields against `POST /signup`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::context::use_auth;
use crate::net::types::Registration;
use crate::util::guard::{DASHBOARD_ROUTE, install_authed_redirect};

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Trim the identity fields and check the passwords.
    pub(crate) fn into_registration(self) -> Result<Registration, &'static str> {
        let registration = Registration {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password,
            confirm_password: self.confirm_password,
        };
        registration.validate()?;
        Ok(registration)
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    install_authed_redirect(auth.state(), navigate.clone());

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match form.get().into_registration() {
            Ok(registration) => registration,
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
            match auth.register(registration).await {
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
                    <h1>"Create Account"</h1>
                    <p>"Get started with your VoiceAI account"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <div class="form-row">
                        <Field id="first_name" label="First Name" kind="text" placeholder="First name"
                            form=form error=error busy=busy
                            get=|f| f.first_name.clone() set=|f, v| f.first_name = v/>
                        <Field id="last_name" label="Last Name" kind="text" placeholder="Last name"
                            form=form error=error busy=busy
                            get=|f| f.last_name.clone() set=|f, v| f.last_name = v/>
                    </div>
                    <Field id="email" label="Email" kind="email" placeholder="Enter your email"
                        form=form error=error busy=busy
                        get=|f| f.email.clone() set=|f, v| f.email = v/>
                    <Field id="password" label="Password" kind="password" placeholder="Create a password"
                        form=form error=error busy=busy
                        get=|f| f.password.clone() set=|f, v| f.password = v/>
                    <Field id="confirmPassword" label="Confirm Password" kind="password" placeholder="Confirm your password"
                        form=form error=error busy=busy
                        get=|f| f.confirm_password.clone() set=|f, v| f.confirm_password = v/>

                    <Show when=move || !error.get().is_empty()>
                        <div class="error-message">{move || error.get()}</div>
                    </Show>

                    <button type="submit" class="auth-btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <p>"Already have an account? " <A href="/login">"Sign in here"</A></p>
                </div>
            </div>
        </div>
    }
}

/// One labelled input bound to a field of [`RegisterForm`]. Typing clears the
/// error banner.
#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    form: RwSignal<RegisterForm>,
    error: RwSignal<String>,
    busy: RwSignal<bool>,
    get: fn(&RegisterForm) -> String,
    set: fn(&mut RegisterForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type=kind
                required
                placeholder=placeholder
                disabled=move || busy.get()
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                    error.set(String::new());
                }
            />
        </div>
    }
}

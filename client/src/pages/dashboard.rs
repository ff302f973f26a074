//! Dashboard shell for signed-in users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::context::use_auth;
use crate::util::guard::install_unauth_redirect;

/// Dashboard page. Redirects to `/login` once auth has loaded without a session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    install_unauth_redirect(auth.state(), use_navigate());

    let state = auth.state();
    let greeting = move || format!("Welcome back, {}", state.get().display_name());

    view! {
        <div class="dashboard-minimal">
            <div class="dashboard-container">
                <header class="dashboard-header">
                    <h1>"VoiceAI Dashboard"</h1>
                    <p>"Manage your voice AI assistant"</p>
                </header>
                <main class="dashboard-main">
                    <p class="dashboard-greeting">{greeting}</p>
                </main>
            </div>
        </div>
    }
}

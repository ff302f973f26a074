//! Top navigation bar for signed-in users.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::context::use_auth;

/// Brand link, greeting, dashboard link, and logout. Renders nothing while
/// signed out.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();

    let on_logout = move |_| {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            auth.logout().await;
        });
    };

    view! {
        <Show when=move || state.get().authenticated>
            <nav class="navbar">
                <div class="navbar-content">
                    <A href="/" attr:class="navbar-brand">"VoiceAI"</A>
                    <ul class="navbar-nav">
                        <li>
                            <span>{move || format!("Welcome, {}", state.get().display_name())}</span>
                        </li>
                        <li>
                            <A href="/dashboard">"Dashboard"</A>
                        </li>
                        <li>
                            <button class="btn" on:click=on_logout.clone()>"Logout"</button>
                        </li>
                    </ul>
                </div>
            </nav>
        </Show>
    }
}

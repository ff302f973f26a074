//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::context::{provide_auth, use_auth};
use crate::components::navbar::Navbar;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage, welcome::WelcomePage};
use crate::util::guard::LOGIN_ROUTE;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, restores the stored session once mounted in the
/// browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = provide_auth();
    let state = auth.state();

    // Effects only run in the browser, where the stored session lives.
    Effect::new(move || auth.hydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/voiceai.css"/>
        <Title text="VoiceAI"/>

        <Router>
            <SessionEndedRedirect/>
            <div class="App">
                <Navbar/>
                <main class=move || if state.get().authenticated { "container" } else { "" }>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=WelcomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Subscriber for the unauthorized event: whenever the server rejects the
/// session, go to the login page.
#[component]
fn SessionEndedRedirect() -> impl IntoView {
    let session_ended = use_auth().session_ended();
    let navigate = use_navigate();

    Effect::new(move |previous: Option<u32>| {
        let current = session_ended.get();
        if previous.is_some_and(|p| p != current) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
        current
    });
}

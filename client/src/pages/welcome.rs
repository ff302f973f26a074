//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="welcome-minimal">
            <div class="welcome-container">
                <header class="welcome-header">
                    <div class="logo">
                        <h1>"VoiceAI"</h1>
                    </div>
                    <nav class="welcome-nav">
                        <A href="/login" attr:class="nav-link">"Login"</A>
                        <A href="/register" attr:class="nav-link nav-button">"Sign Up"</A>
                    </nav>
                </header>

                <main class="welcome-main">
                    <div class="hero-section">
                        <h2 class="hero-title">"AI Voice Agent for Your Business"</h2>
                        <p class="hero-description">
                            "Let our intelligent voice agent handle calls, book appointments, and provide 24/7 customer service."
                        </p>
                        <div class="hero-actions">
                            <A href="/register" attr:class="btn-primary">"Get Started"</A>
                            <A href="/login" attr:class="btn-secondary">"Sign In"</A>
                        </div>
                    </div>

                    <section class="features-section">
                        <Feature title="Always Available" text="Never miss a call. AI answers 24/7."/>
                        <Feature title="Smart Booking" text="Automatically schedule appointments."/>
                        <Feature title="Natural Conversations" text="Human-like AI interactions."/>
                    </section>
                </main>

                <footer class="welcome-footer">
                    <p>"© 2024 VoiceAI. All rights reserved."</p>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn Feature(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="feature">
            <h3>{title}</h3>
            <p>{text}</p>
        </div>
    }
}

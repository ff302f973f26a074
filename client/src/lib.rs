//! # voiceai-client
//!
//! Leptos + WASM frontend for the VoiceAI product: marketing page, login and
//! registration forms, a token session kept in browser `localStorage`, and
//! the dashboard shell.
//!
//! All authentication and business logic lives in the external REST API. This
//! crate owns the session store, the HTTP adapter that attaches credentials and
//! reports authorization failures, and the auth flows built on top of them.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

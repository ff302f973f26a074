//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the forwarding routes with Leptos SSR rendering
//! under a single Axum router. The page routes and the account endpoints
//! share paths (`GET /login` renders the page, `POST /login` is forwarded),
//! so both routers are merged per method.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Forwarding routes plus the health probe.
pub fn api_routes(state: AppState) -> Router {
    proxy::routes(state).route("/healthz", get(healthz))
}

/// Full host router: API routes, Leptos SSR pages and `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(voiceai_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || voiceai_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Hydration bundle (WASM, JS, CSS) produced under the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

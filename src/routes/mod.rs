//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the theme and tips API endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. Without a Leptos configuration
//! (for example when the binary runs outside `cargo leptos`), only the API is
//! served.

pub mod theme;
pub mod tips;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Theme and tips API routes plus health check.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/theme/settings", get(theme::settings))
        .route("/theme/toggle", post(theme::toggle))
        .route("/tips/disable", post(tips::disable))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application router: API routes, Leptos SSR page, and static assets.
/// Falls back to the API alone if the Leptos configuration cannot be loaded.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos configuration unavailable; serving API only");
            api_routes(state)
        }
    };
    router.layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend merged with the API routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let state = state.clone();
            move || client::app::shell(opts.clone(), state.tips_on_load())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST endpoints and stitches them with Leptos SSR
//! rendering under a single Axum router. API routes live under `/api`, the
//! storefront pages everywhere else, and compiled assets under `/pkg`.

pub mod auths;
pub mod menu;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// REST routes consumed by the storefront pages.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auths/register", post(auths::register))
        .route("/api/auths/login", post(auths::login))
        .route("/api/auths/logout", get(auths::logout))
        .route("/api/pizzas", get(menu::list_pizzas).post(menu::create_pizza))
        .route("/api/drinks", get(menu::list_drinks))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR storefront + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded from the
/// `LEPTOS_*` variables that cargo-leptos derives from the workspace manifest.
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

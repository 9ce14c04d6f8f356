//! # client
//!
//! Leptos storefront for the pizzeria: menu pages, account forms and the
//! signed-in user context. Rendered on the server by `server` (feature `ssr`)
//! and hydrated in the browser (feature `hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! # client
//!
//! Leptos + WASM page for light/dark theme preference synchronization.
//!
//! This crate contains the preference synchronizer, the tip and settings
//! dialog controllers, and the components that render them. The server crate
//! renders [`app::shell`] with the `ssr` feature; the browser bundle is built
//! with `hydrate` and enters through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! # inkpost-client
//!
//! Leptos + WASM front-end for the Inkpost blog platform.
//!
//! The crate holds the pages, components, the framework-free auth and blog
//! stores, the bearer-token session layer, and the HTTP client for the
//! external blog backend. The `inkpost` binary renders it with SSR; the
//! `hydrate` entry point below takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

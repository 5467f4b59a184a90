//! # client
//!
//! Leptos front end for DonationHub: donor and administrator screens over the
//! remote donation API, with role-based navigation guards.
//!
//! The crate builds twice: `hydrate` for the browser (WASM) and `ssr` for the
//! Axum host, which renders the same `App` on the server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}

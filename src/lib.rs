//! # plagiarism-web
//!
//! Leptos CSR frontend for the Sinhala plagiarism checker. Pages, components,
//! and browser adapters live here; account state and route rules come from the
//! `session` crate and are wired in by [`app::App`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}

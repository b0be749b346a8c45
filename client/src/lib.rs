//! # client
//!
//! Leptos front-end for the study-hall seat reservation service: the public
//! QR registration form and the staff screens (occupancy, history, settings).
//!
//! The crate compiles twice: with `hydrate` into the WASM bundle and with
//! `ssr` into the library the Axum host renders. Browser APIs are only
//! touched behind `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

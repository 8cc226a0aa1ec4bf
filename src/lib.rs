//! # frenzy-client
//!
//! Leptos + WASM frontend for Frenzy, the household-services e-commerce
//! app. Replaces the Vue `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the backend
//! API surface, and the client-side router with its navigation guard and
//! presentation sink.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: initialize logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

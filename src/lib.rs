//! # portal
//!
//! Leptos + WASM frontend for the assessment portal: dashboard, assessments,
//! results, and customer management behind a login.
//!
//! This crate contains the route table, the session store that persists the
//! signed-in user in browser storage, the login API client, and thin page
//! views. Session and routing rules are plain Rust so they can be tested
//! without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

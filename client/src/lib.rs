//! # client
//!
//! Leptos + WASM front-end for the POS assistant chat.
//!
//! This crate contains the chat page and its components, the chat state and
//! controller, the pure view layer that turns classified backend replies into
//! renderable descriptions, and the HTTP transport to the `/agent` and
//! `/health` endpoints. Formatting and export logic lives in the `charts`
//! crate; wire types live in `protocol`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

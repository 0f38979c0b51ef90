//! # client
//!
//! Leptos + WASM admin console for a reqres-style users API.
//!
//! This crate contains the login and user-directory pages, their components,
//! the session and directory stores, and the HTTP client for the remote API.
//! The `ssr` build is rendered by the host binary; the `hydrate` build runs in
//! the browser and owns every remote call and all `localStorage` access.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

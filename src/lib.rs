//! # marketplace-client
//!
//! Leptos + WASM storefront client for the "Na Loja Tem" marketplace.
//!
//! The crate holds the browser-side behavior of the storefront: header
//! widgets, the product carousel, cart synchronization, favorites, the
//! store-registration wizard with its input masks and CEP lookup, session
//! handling, and the seller dashboard. State models live in `state` and are
//! plain Rust so they test natively; browser effects are gated behind the
//! `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}

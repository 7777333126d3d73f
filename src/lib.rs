//! # folio
//!
//! Leptos + WASM frontend for a single-page personal portfolio.
//!
//! The page logic (theme preference, navigation highlighting, scroll effects,
//! project filtering, reveal animations, contact submission, notifications,
//! typing effect) lives in `state` as plain Rust and is tested on the host.
//! Components in `components` bind that logic to the DOM. Browser glue is
//! compiled only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

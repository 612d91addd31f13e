//! # ridepool
//!
//! Leptos + WASM client for a ride-sharing service backed by a remote REST
//! table store. Drivers post ride offers, passengers browse and book seats,
//! and both sides track the active ride through completion.
//!
//! This crate contains pages, components, application state, the wire
//! schema, and the query-building store wrapper that translates data access
//! into REST requests with bearer-token authentication.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log bridges and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

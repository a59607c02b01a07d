//! # activities-roster
//!
//! Leptos + WASM admin widget for extracurricular activity rosters. Lists the
//! activities served by the backend, signs a student up by email, and lets an
//! organizer remove a participant.
//!
//! Browser-only code sits behind the `csr` feature; everything else (wire
//! types, view state, controller logic) builds and tests natively.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}

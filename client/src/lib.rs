//! Landing page frontend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders [`app::App`] for first paint; the `hydrate` build
//! attaches to that markup in the browser and drives the interactive widgets
//! (theme toggle, project and blog sections, chat, scroll effects).
//!
//! Browser-only behavior sits behind `#[cfg(feature = "hydrate")]` so the
//! same components compile for SSR and for native unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

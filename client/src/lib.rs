//! Alumni-portal front end.
//!
//! ARCHITECTURE
//! ============
//! Rendered twice: server-side by the `server` crate (feature `ssr`) and in
//! the browser after hydration (feature `hydrate`). Pages own route-scoped
//! orchestration, `components` render shared chrome, `state` holds the auth
//! context, and `net` wraps the HTTP calls back to the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

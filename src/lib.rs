//! # webdash-client
//!
//! Leptos + WASM frontend for the Webdash dashboard demo. Owns the
//! authentication UI (login/register tabs): local field validation,
//! calls to the backend auth endpoints, and the dashboard redirect on
//! login success.
//!
//! The backend serving `/api/auth/login` and `/api/auth/register` lives
//! outside this crate; everything here is client-side form state and
//! request/response mapping.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

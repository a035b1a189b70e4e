//! Voice-AI Web Frontend
//!
//! Leptos-based WASM frontend: marketing home, contact form, and the
//! "create your own agent" demo flow.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}

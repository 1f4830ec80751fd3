//! The Republic Beacon Web Frontend
//!
//! Leptos-based WASM frontend: a single console view with the inquiry input,
//! the link directory, and four overlays.

mod app;
mod components;
mod content;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

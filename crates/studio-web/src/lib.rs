//! PrivGPT Studio Web Frontend
//!
//! Leptos-based WASM frontend for the documentation site. Page content
//! renders behind the splash gate from `studio-core`.

mod app;
mod components;
mod content;
mod pages;
mod splash;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

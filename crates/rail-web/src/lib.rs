//! PakRail Chat Web Frontend
//!
//! Leptos-based WASM front end for the railway booking assistant.

mod app;
mod components;
mod logging;
mod storage;

pub use app::App;
pub use storage::LocalSessionStore;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}

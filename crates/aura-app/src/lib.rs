//! AURA App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the platform adapters, hands them to the session
//! controller and exposes the result to the page as [`console::AuraConsole`].

mod console;

pub use console::AuraConsole;

use wasm_bindgen::prelude::*;

/// WASM entry point — called when the module is instantiated
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("AURA console starting...");
}

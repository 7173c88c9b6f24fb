//! Flipbook & Highlight Effects WASM Module
//!
//! This is the WASM module powering two interaction components of a host
//! web document: a 3D page-flipping book widget and an animated
//! text-highlight overlay. The page-turn state machine and the highlight
//! geometry are pure Rust; the `dom` layer applies their output to the
//! document.

pub mod models;
pub mod flipbook;
pub mod highlight;
pub mod timing;
pub mod dom;
pub mod api;

// Re-export commonly used types
pub use models::geometry::Rect;
pub use models::options::{FlipbookOptions, HighlightOptions};
pub use flipbook::machine::{FlipbookMachine, NavDirection};
pub use flipbook::effects::FlipEffect;
pub use highlight::layout::{sweep_layers, SweepLayer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Flipbook effects WASM module initialized");
}

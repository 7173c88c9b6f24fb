//! JavaScript-facing WASM API
//!
//! This module provides the host-facing API for both components. It
//! includes shared utilities for options deserialization and error
//! handling, plus the exported entry points.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for deserialization, error handling, and logging
//! - `core`: Exported API functions and the live-controller registry

pub mod helpers;
pub mod core;

// Re-export all public functions to keep a flat JS-visible surface
pub use core::{
    animate_highlights, flipbook_location, flipbook_next_page, flipbook_prev_page,
    init_flipbook, init_highlights, toggle_flipbook_fullscreen,
};

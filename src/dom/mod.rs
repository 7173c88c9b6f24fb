//! Browser layer
//!
//! Everything that touches web-sys: structural element lookup, effect
//! application, highlight layer creation, event wiring, and the
//! `setTimeout`/`requestAnimationFrame`-backed scheduler.

pub mod errors;
pub mod flipbook;
pub mod highlight;
pub mod scheduler;

pub use errors::SetupError;
pub use flipbook::{setup_flipbook, FlipbookController};
pub use highlight::{install_resize_listener, run_highlight_pass};
pub use scheduler::DomScheduler;

use web_sys::{Document, Window};

pub(crate) fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub(crate) fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

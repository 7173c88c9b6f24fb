//! Flipbook page-turn state machine
//!
//! The machine owns the navigation state and knows nothing about the
//! document. Every transition returns an ordered list of [`FlipEffect`]
//! render mutations for the `dom` layer (or a test double) to apply.

pub mod effects;
pub mod machine;

pub use effects::FlipEffect;
pub use machine::{FlipbookMachine, NavDirection};

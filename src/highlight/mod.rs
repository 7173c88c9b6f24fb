//! Text-highlight sweep geometry
//!
//! Computes the overlay layers for a marked span from its measured line
//! rectangles. Purely geometric; measurement and DOM insertion live in
//! the `dom` layer.

pub mod layout;

pub use layout::{sweep_layers, SweepLayer};

//! Viewport geometry
//!
//! A plain rectangle mirroring the fields of a `DOMRect`. Measurement
//! happens in the `dom` layer; everything downstream works on these.

use serde::{Deserialize, Serialize};

/// A viewport-relative rectangle (same coordinate space as `DOMRect`)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Distance from the viewport top to the rectangle's top edge
    pub top: f64,

    /// Distance from the viewport left to the rectangle's left edge
    pub left: f64,

    /// Rectangle width
    pub width: f64,

    /// Rectangle height
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

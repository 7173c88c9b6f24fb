//! Overlay layer placement
//!
//! A span's text can wrap across several visual lines, each reported as
//! its own client rectangle. Every line gets one overlay layer placed at
//! the line's offset within the span. Layers start at width zero and the
//! stylesheet transitions them to `width`; staggered `delay_ms` values
//! make the lines sweep in sequence rather than all at once.

use serde::{Deserialize, Serialize};

use crate::models::geometry::Rect;

/// Placement of one overlay layer over one visual text line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SweepLayer {
    /// Offset from the span's top edge
    pub top: f64,

    /// Offset from the span's left edge
    pub left: f64,

    /// Layer height (the line's height)
    pub height: f64,

    /// Target width the sweep transition grows to
    pub width: f64,

    /// Transition delay for this line, `line_index * step`
    pub delay_ms: u32,
}

/// Compute one overlay layer per line rectangle, positioned relative to
/// the span's own bounding rectangle.
pub fn sweep_layers(line_rects: &[Rect], span_rect: &Rect, step_ms: u32) -> Vec<SweepLayer> {
    line_rects
        .iter()
        .enumerate()
        .map(|(index, rect)| SweepLayer {
            top: rect.top - span_rect.top,
            left: rect.left - span_rect.left,
            height: rect.height,
            width: rect.width,
            delay_ms: index as u32 * step_ms,
        })
        .collect()
}

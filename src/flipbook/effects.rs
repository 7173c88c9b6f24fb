//! Render effects emitted by the flipbook machine
//!
//! Effects carry everything the renderer needs: page positions are
//! 0-based indexes into the book's page list, stacking values are final
//! `z-index` numbers, and delayed restacking carries its own delay so no
//! renderer has to know the machine's timing rules.

use serde::{Deserialize, Serialize};

/// A single declarative render mutation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum FlipEffect {
    /// Set a page's stacking order immediately
    SetStacking { page: usize, z_index: i32 },

    /// Restore a page's stacking order after the unflip transition has
    /// visually cleared
    SetStackingDelayed {
        page: usize,
        z_index: i32,
        delay_ms: u32,
    },

    /// Add the flipped marker class to a page
    MarkFlipped { page: usize },

    /// Remove the flipped marker class from a page
    ClearFlipped { page: usize },

    /// Translate the book to its centered open position and move both
    /// nav controls outward
    OpenBook,

    /// Translate the book to a closed position; `at_beginning` selects
    /// the front cover position, otherwise the back cover position
    CloseBook { at_beginning: bool },

    /// Refresh the enabled/disabled state of the nav buttons
    SetButtons {
        prev_disabled: bool,
        next_disabled: bool,
    },

    /// Mark the container fullscreen and reparent it to the document body
    EnterFullscreen,

    /// Unmark fullscreen and reinsert the container after its placeholder
    ExitFullscreen,
}

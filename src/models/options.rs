//! Component options
//!
//! Both components are configured from JavaScript with a plain object;
//! omitted fields (or an omitted object) fall back to the defaults the
//! host stylesheet was written against.

use serde::{Deserialize, Serialize};

/// Configuration for the highlight animator
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct HighlightOptions {
    /// Selector matching the marked text spans
    pub span_selector: String,

    /// Class applied to every generated overlay layer
    pub layer_class: String,

    /// Activation delay added per wrapped line, in milliseconds
    pub line_delay_step_ms: u32,

    /// Quiet period for the resize debounce, in milliseconds
    pub resize_debounce_ms: u32,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            span_selector: ".highlight".to_string(),
            layer_class: "highlight-layer".to_string(),
            line_delay_step_ms: 600,
            resize_debounce_ms: 250,
        }
    }
}

/// Configuration for the flipbook widget
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FlipbookOptions {
    /// Selector for the flipbook container
    pub container_selector: String,

    /// Element id of the previous-page button
    pub prev_button_id: String,

    /// Element id of the next-page button
    pub next_button_id: String,

    /// Element id of the book element holding the pages
    pub book_id: String,

    /// Element id of the fullscreen toggle button
    pub fullscreen_button_id: String,

    /// Element id of the placeholder marking the container's home position
    pub placeholder_id: String,

    /// Class identifying page elements inside the book
    pub page_class: String,

    /// Class marking the container while in fullscreen mode
    pub fullscreen_class: String,

    /// Class marking a page as flipped
    pub flipped_class: String,

    /// Delay before a turned-back page regains its stacking position,
    /// in milliseconds (long enough for the unflip animation to clear)
    pub restack_delay_ms: u32,
}

impl Default for FlipbookOptions {
    fn default() -> Self {
        Self {
            container_selector: ".high-fidelity-3d-flipbook".to_string(),
            prev_button_id: "flipbook-prev-btn".to_string(),
            next_button_id: "flipbook-next-btn".to_string(),
            book_id: "book".to_string(),
            fullscreen_button_id: "fullscreenBtn".to_string(),
            placeholder_id: "flipbook-placeholder".to_string(),
            page_class: "page".to_string(),
            fullscreen_class: "fullscreen-mode".to_string(),
            flipped_class: "flipped".to_string(),
            restack_delay_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_defaults_match_stylesheet_contract() {
        let opts = HighlightOptions::default();
        assert_eq!(opts.span_selector, ".highlight");
        assert_eq!(opts.layer_class, "highlight-layer");
        assert_eq!(opts.line_delay_step_ms, 600);
        assert_eq!(opts.resize_debounce_ms, 250);
    }

    #[test]
    fn partial_options_object_keeps_remaining_defaults() {
        let opts: FlipbookOptions =
            serde_json::from_str(r#"{ "book_id": "my-book" }"#).unwrap();
        assert_eq!(opts.book_id, "my-book");
        assert_eq!(opts.prev_button_id, "flipbook-prev-btn");
        assert_eq!(opts.restack_delay_ms, 300);
    }
}

//! Setup error types
//!
//! Structural failures found while locating the widget's required
//! elements. These abort initialization with a logged diagnostic; they
//! never propagate to the host as exceptions.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Initialization failure
#[derive(Debug, Clone, Error)]
pub enum SetupError {
    /// No global window object (not running in a browsing context)
    #[error("no global window object")]
    NoWindow,

    /// The window has no document
    #[error("window has no document")]
    NoDocument,

    /// A required structural element is missing from the document
    #[error("required element not found: {0}")]
    MissingElement(String),

    /// An element was found but has the wrong type for its role
    #[error("element #{id} is not a {expected}")]
    WrongElementKind { id: String, expected: &'static str },

    /// A configured selector was rejected by the document
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// The book contains no page elements
    #[error("the book contains no pages")]
    NoPages,

    /// The structure was valid but the initial render failed
    #[error("initial render failed: {0}")]
    RenderFailed(String),
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

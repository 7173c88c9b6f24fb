//! Exported API functions
//!
//! The host document drives both components through these entry points:
//! `initFlipbook` on page load, `animateHighlights`/`initHighlights`
//! when highlighted content is (re)rendered. Structural failures log a
//! diagnostic and resolve to `false`; no exception reaches the host for
//! a missing widget.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::api::helpers;
use crate::dom::flipbook::{setup_flipbook, FlipbookController};
use crate::dom::highlight::{install_resize_listener, run_highlight_pass};
use crate::models::options::{FlipbookOptions, HighlightOptions};
use crate::{wasm_error, wasm_info, wasm_log};

thread_local! {
    // Live controller for the page's flipbook. DOM handles are not Send,
    // so this registry is thread-local (WASM runs single-threaded).
    static FLIPBOOK: RefCell<Option<Rc<RefCell<FlipbookController>>>> = RefCell::new(None);
}

lazy_static! {
    // Options remembered from initHighlights so later bare
    // animateHighlights() calls reuse the host's configuration.
    static ref HIGHLIGHT_OPTIONS: Mutex<Option<HighlightOptions>> = Mutex::new(None);
}

fn remember_highlight_options(options: &HighlightOptions) {
    if let Ok(mut slot) = HIGHLIGHT_OPTIONS.lock() {
        *slot = Some(options.clone());
    }
}

fn resolve_highlight_options(value: JsValue) -> Result<HighlightOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        if let Ok(slot) = HIGHLIGHT_OPTIONS.lock() {
            if let Some(options) = slot.as_ref() {
                return Ok(options.clone());
            }
        }
        return Ok(HighlightOptions::default());
    }
    helpers::deserialize(value, "highlight options")
}

/// Initialize the flipbook widget.
///
/// Returns `true` when the widget was found and wired. Returns `false`
/// when the page has no flipbook container, or when a required piece of
/// its structure is missing (logged as a diagnostic; no listeners are
/// registered in that case). Re-initialization replaces the previous
/// handlers rather than stacking them.
#[wasm_bindgen(js_name = initFlipbook)]
pub fn init_flipbook(options: JsValue) -> Result<bool, JsValue> {
    let options: FlipbookOptions = helpers::options_from_js(options, "flipbook options")?;

    match setup_flipbook(options) {
        Ok(Some(controller)) => {
            let pages = controller.borrow().num_pages();
            FLIPBOOK.with(|slot| *slot.borrow_mut() = Some(controller));
            wasm_info!("flipbook initialized with {} pages", pages);
            Ok(true)
        }
        Ok(None) => {
            wasm_log!("no flipbook container on this page");
            Ok(false)
        }
        Err(err) => {
            wasm_error!("flipbook initialization failed: {}", err);
            Ok(false)
        }
    }
}

fn with_controller(
    operation: &str,
    f: impl FnOnce(&mut FlipbookController) -> Result<(), JsValue>,
) -> Result<(), JsValue> {
    FLIPBOOK.with(|slot| match slot.borrow().as_ref() {
        Some(controller) => f(&mut controller.borrow_mut()),
        None => {
            wasm_log!("{} ignored: flipbook not initialized", operation);
            Ok(())
        }
    })
}

/// Flip forward one page (same as the next button)
#[wasm_bindgen(js_name = flipbookNextPage)]
pub fn flipbook_next_page() -> Result<(), JsValue> {
    with_controller("flipbookNextPage", |c| c.next_page())
}

/// Turn back one page (same as the previous button)
#[wasm_bindgen(js_name = flipbookPrevPage)]
pub fn flipbook_prev_page() -> Result<(), JsValue> {
    with_controller("flipbookPrevPage", |c| c.prev_page())
}

/// Toggle fullscreen mode (same as the fullscreen button)
#[wasm_bindgen(js_name = toggleFlipbookFullscreen)]
pub fn toggle_flipbook_fullscreen() -> Result<(), JsValue> {
    with_controller("toggleFlipbookFullscreen", |c| c.toggle_fullscreen())
}

/// Current 1-based location, or 0 when no flipbook is initialized
#[wasm_bindgen(js_name = flipbookLocation)]
pub fn flipbook_location() -> u32 {
    FLIPBOOK.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|c| c.borrow().location() as u32)
            .unwrap_or(0)
    })
}

/// Run one highlight pass over the document.
///
/// Called by the host whenever highlighted content is rendered. With no
/// options object, reuses the options from the last `initHighlights`
/// call. Returns the number of overlay layers created.
#[wasm_bindgen(js_name = animateHighlights)]
pub fn animate_highlights(options: JsValue) -> Result<u32, JsValue> {
    let options = resolve_highlight_options(options)?;
    run_highlight_pass(&options).map_err(|err| {
        helpers::log_error(&format!("highlight pass failed: {:?}", err));
        err
    })
}

/// Run a highlight pass and install the debounced resize recomputation
#[wasm_bindgen(js_name = initHighlights)]
pub fn init_highlights(options: JsValue) -> Result<u32, JsValue> {
    let options = resolve_highlight_options(options)?;
    remember_highlight_options(&options);

    let created = run_highlight_pass(&options)?;
    install_resize_listener(options)?;
    wasm_info!("highlight animator initialized ({} layers)", created);
    Ok(created)
}

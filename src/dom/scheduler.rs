//! Browser-backed scheduler
//!
//! `DomScheduler` maps the [`Scheduler`] trait onto `setTimeout` /
//! `clearTimeout`; `request_frame` defers work to the next paint frame.
//! Callbacks are handed to the JS garbage collector via
//! `Closure::once_into_js`, so nothing on the Rust side has to keep them
//! alive.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::timing::Scheduler;

pub struct DomScheduler;

impl Scheduler for DomScheduler {
    type Handle = i32;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> i32 {
        let cb = Closure::once_into_js(callback);
        let window = match super::window() {
            Ok(window) => window,
            Err(err) => {
                log::error!("cannot schedule callback: {}", err);
                return 0;
            }
        };
        match window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms as i32)
        {
            Ok(handle) => handle,
            Err(err) => {
                log::error!("setTimeout failed: {:?}", err);
                0
            }
        }
    }

    fn cancel(&self, handle: i32) {
        if let Ok(window) = super::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
}

/// Run `callback` on the next animation frame
pub fn request_frame(callback: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let window = super::window()?;
    let cb = Closure::once_into_js(callback);
    window.request_animation_frame(cb.unchecked_ref())?;
    Ok(())
}

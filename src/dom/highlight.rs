//! Highlight overlay DOM pass
//!
//! Measures every marked span, rebuilds its overlay layers, and arms the
//! width sweep on the next paint frame. The pass is idempotent: existing
//! layers are discarded before recomputation, so running it again after
//! a resize replaces the overlays instead of accumulating them.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, HtmlElement};

use super::scheduler::{request_frame, DomScheduler};
use crate::highlight::layout::sweep_layers;
use crate::models::geometry::Rect;
use crate::models::options::HighlightOptions;
use crate::timing::Debouncer;

fn rect_from_dom(rect: &DomRect) -> Rect {
    Rect::new(rect.top(), rect.left(), rect.width(), rect.height())
}

/// Measure the visual line rectangles of a span's contents
fn measure_lines(document: &Document, span: &HtmlElement) -> Result<Vec<Rect>, JsValue> {
    let range = document.create_range()?;
    range.select_node_contents(span)?;
    let rects = match range.get_client_rects() {
        Some(rects) => rects,
        None => return Ok(Vec::new()),
    };
    let mut lines = Vec::with_capacity(rects.length() as usize);
    for i in 0..rects.length() {
        if let Some(rect) = rects.item(i) {
            lines.push(rect_from_dom(&rect));
        }
    }
    Ok(lines)
}

fn clear_layers(span: &HtmlElement, layer_class: &str) -> Result<(), JsValue> {
    let old = span.query_selector_all(&format!(".{}", layer_class))?;
    for i in 0..old.length() {
        if let Some(node) = old.item(i) {
            if let Ok(el) = node.dyn_into::<web_sys::Element>() {
                el.remove();
            }
        }
    }
    Ok(())
}

/// Rebuild the overlay layers for every marked span in the document.
///
/// Returns the number of layers created; a document without marked
/// spans is a no-op returning 0.
pub fn run_highlight_pass(options: &HighlightOptions) -> Result<u32, JsValue> {
    let document = super::document()?;
    let spans = document.query_selector_all(&options.span_selector)?;

    let mut created = 0u32;
    for i in 0..spans.length() {
        let node = match spans.item(i) {
            Some(node) => node,
            None => continue,
        };
        let span: HtmlElement = match node.dyn_into() {
            Ok(el) => el,
            Err(_) => continue,
        };

        clear_layers(&span, &options.layer_class)?;

        let lines = measure_lines(&document, &span)?;
        let span_rect = rect_from_dom(&span.get_bounding_client_rect());
        let layers = sweep_layers(&lines, &span_rect, options.line_delay_step_ms);

        for layer in layers {
            let el = document.create_element("div")?;
            el.class_list().add_1(&options.layer_class)?;
            let el: HtmlElement = el
                .dyn_into()
                .map_err(|_| JsValue::from_str("created layer is not an HTMLElement"))?;

            let style = el.style();
            style.set_property("top", &format!("{}px", layer.top))?;
            style.set_property("left", &format!("{}px", layer.left))?;
            style.set_property("height", &format!("{}px", layer.height))?;
            style.set_property("transition-delay", &format!("{}ms", layer.delay_ms))?;
            span.append_child(&el)?;

            // The stylesheet renders new layers at width 0; growing to
            // the target on the next frame triggers the sweep transition.
            let style = el.style();
            let width = format!("{}px", layer.width);
            request_frame(move || {
                if let Err(err) = style.set_property("width", &width) {
                    log::warn!("sweep activation failed: {:?}", err);
                }
            })?;
            created += 1;
        }
    }

    log::debug!("highlight pass created {} layers", created);
    Ok(created)
}

/// Install the debounced window-resize recomputation.
///
/// Uses the single-slot `onresize` property, so repeated installation
/// replaces the previous handler. A resize burst collapses into one
/// recomputation after the configured quiet period.
pub fn install_resize_listener(options: HighlightOptions) -> Result<(), JsValue> {
    let window = super::window()?;
    let debouncer = Debouncer::new(DomScheduler, options.resize_debounce_ms);

    let closure = Closure::<dyn FnMut()>::new(move || {
        let opts = options.clone();
        debouncer.trigger(Box::new(move || {
            if let Err(err) = run_highlight_pass(&opts) {
                log::error!("highlight recomputation failed: {:?}", err);
            }
        }));
    });
    window.set_onresize(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    Ok(())
}

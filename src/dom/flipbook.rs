//! Flipbook DOM binding
//!
//! Locates the widget's structural elements, applies [`FlipEffect`]s to
//! them, and wires the event handlers. Handlers are assigned to the
//! single-slot `on*` properties, so re-running setup replaces them
//! instead of stacking duplicates.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, KeyboardEvent, MouseEvent};

use super::errors::SetupError;
use super::scheduler::DomScheduler;
use crate::flipbook::effects::FlipEffect;
use crate::flipbook::machine::{FlipbookMachine, NavDirection};
use crate::models::options::FlipbookOptions;
use crate::timing::Scheduler;

/// The widget's structural elements
pub struct FlipbookDom {
    pub(crate) container: HtmlElement,
    pub(crate) prev_btn: HtmlButtonElement,
    pub(crate) next_btn: HtmlButtonElement,
    pub(crate) book: HtmlElement,
    pub(crate) fullscreen_btn: HtmlElement,
    pub(crate) placeholder: Element,
    pub(crate) pages: Vec<HtmlElement>,
    options: FlipbookOptions,
}

fn required(document: &Document, id: &str) -> Result<Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement(format!("#{}", id)))
}

fn as_html(element: Element, id: &str) -> Result<HtmlElement, SetupError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::WrongElementKind {
            id: id.to_string(),
            expected: "HTMLElement",
        })
}

fn as_button(element: Element, id: &str) -> Result<HtmlButtonElement, SetupError> {
    element
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| SetupError::WrongElementKind {
            id: id.to_string(),
            expected: "button",
        })
}

impl FlipbookDom {
    /// Locate the widget in the document. `Ok(None)` means the container
    /// is absent (the widget simply isn't on this page); any missing
    /// piece inside an existing container is an error.
    pub fn locate(
        document: &Document,
        options: &FlipbookOptions,
    ) -> Result<Option<Self>, SetupError> {
        let container = document
            .query_selector(&options.container_selector)
            .map_err(|_| SetupError::InvalidSelector(options.container_selector.clone()))?;
        let container = match container {
            Some(el) => as_html(el, &options.container_selector)?,
            None => return Ok(None),
        };

        let prev_btn = as_button(
            required(document, &options.prev_button_id)?,
            &options.prev_button_id,
        )?;
        let next_btn = as_button(
            required(document, &options.next_button_id)?,
            &options.next_button_id,
        )?;
        let book = as_html(required(document, &options.book_id)?, &options.book_id)?;
        let fullscreen_btn = as_html(
            required(document, &options.fullscreen_button_id)?,
            &options.fullscreen_button_id,
        )?;
        let placeholder = required(document, &options.placeholder_id)?;

        let page_selector = format!(".{}", options.page_class);
        let nodes = book
            .query_selector_all(&page_selector)
            .map_err(|_| SetupError::InvalidSelector(page_selector))?;
        let mut pages = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(el) = node.dyn_into::<HtmlElement>() {
                    pages.push(el);
                }
            }
        }
        if pages.is_empty() {
            return Err(SetupError::NoPages);
        }

        Ok(Some(Self {
            container,
            prev_btn,
            next_btn,
            book,
            fullscreen_btn,
            placeholder,
            pages,
            options: options.clone(),
        }))
    }

    /// Apply one render effect to the document
    pub fn apply(&self, effect: &FlipEffect, scheduler: &DomScheduler) -> Result<(), JsValue> {
        match effect {
            FlipEffect::SetStacking { page, z_index } => {
                if let Some(el) = self.pages.get(*page) {
                    el.style().set_property("z-index", &z_index.to_string())?;
                }
            }
            FlipEffect::SetStackingDelayed {
                page,
                z_index,
                delay_ms,
            } => {
                if let Some(el) = self.pages.get(*page) {
                    let el = el.clone();
                    let z = z_index.to_string();
                    scheduler.schedule(
                        *delay_ms,
                        Box::new(move || {
                            if let Err(err) = el.style().set_property("z-index", &z) {
                                log::warn!("delayed restack failed: {:?}", err);
                            }
                        }),
                    );
                }
            }
            FlipEffect::MarkFlipped { page } => {
                if let Some(el) = self.pages.get(*page) {
                    el.class_list().add_1(&self.options.flipped_class)?;
                }
            }
            FlipEffect::ClearFlipped { page } => {
                if let Some(el) = self.pages.get(*page) {
                    el.class_list().remove_1(&self.options.flipped_class)?;
                }
            }
            FlipEffect::OpenBook => {
                self.book.style().set_property("transform", "translateX(50%)")?;
                self.prev_btn
                    .style()
                    .set_property("transform", "translateX(-120px)")?;
                self.next_btn
                    .style()
                    .set_property("transform", "translateX(120px)")?;
            }
            FlipEffect::CloseBook { at_beginning } => {
                let book_transform = if *at_beginning {
                    "translateX(0%)"
                } else {
                    "translateX(100%)"
                };
                self.book.style().set_property("transform", book_transform)?;
                self.prev_btn
                    .style()
                    .set_property("transform", "translateX(0)")?;
                self.next_btn
                    .style()
                    .set_property("transform", "translateX(0)")?;
            }
            FlipEffect::SetButtons {
                prev_disabled,
                next_disabled,
            } => {
                self.prev_btn.set_disabled(*prev_disabled);
                self.next_btn.set_disabled(*next_disabled);
            }
            FlipEffect::EnterFullscreen => {
                self.container
                    .class_list()
                    .add_1(&self.options.fullscreen_class)?;
                // Reparent to the body to escape any clipping ancestor.
                let document = super::document()?;
                let body = document
                    .body()
                    .ok_or_else(|| JsValue::from_str("document has no body"))?;
                body.append_child(&self.container)?;
            }
            FlipEffect::ExitFullscreen => {
                self.container
                    .class_list()
                    .remove_1(&self.options.fullscreen_class)?;
                // Back to the home position, right after the placeholder.
                if let Some(parent) = self.placeholder.parent_element() {
                    parent.insert_before(&self.container, self.placeholder.next_sibling().as_ref())?;
                }
            }
        }
        Ok(())
    }
}

/// The live widget: state machine plus its DOM binding
pub struct FlipbookController {
    machine: FlipbookMachine,
    dom: FlipbookDom,
    scheduler: DomScheduler,
}

impl FlipbookController {
    fn new(machine: FlipbookMachine, dom: FlipbookDom) -> Self {
        Self {
            machine,
            dom,
            scheduler: DomScheduler,
        }
    }

    fn apply_all(&self, effects: &[FlipEffect]) -> Result<(), JsValue> {
        for effect in effects {
            self.dom.apply(effect, &self.scheduler)?;
        }
        Ok(())
    }

    /// Current 1-based location
    pub fn location(&self) -> usize {
        self.machine.current_location()
    }

    pub fn num_pages(&self) -> usize {
        self.machine.num_pages()
    }

    pub fn next_page(&mut self) -> Result<(), JsValue> {
        let effects = self.machine.go_next_page();
        self.apply_all(&effects)
    }

    pub fn prev_page(&mut self) -> Result<(), JsValue> {
        let effects = self.machine.go_prev_page();
        self.apply_all(&effects)
    }

    pub fn navigate(&mut self, direction: NavDirection) -> Result<(), JsValue> {
        match direction {
            NavDirection::Prev => self.prev_page(),
            NavDirection::Next => self.next_page(),
        }
    }

    pub fn toggle_fullscreen(&mut self) -> Result<(), JsValue> {
        let effects = self.machine.toggle_fullscreen();
        self.apply_all(&effects)
    }

    /// Leave fullscreen if active; used by Escape and background clicks
    pub fn exit_fullscreen_if_active(&mut self) -> Result<(), JsValue> {
        let effects = self.machine.exit_fullscreen();
        self.apply_all(&effects)
    }
}

/// Locate the widget, render its initial state, and wire all handlers.
///
/// `Ok(None)` means the page has no flipbook container. Structural
/// errors surface as [`SetupError`] before any handler is registered.
pub fn setup_flipbook(
    options: FlipbookOptions,
) -> Result<Option<Rc<RefCell<FlipbookController>>>, SetupError> {
    let document = super::document()?;
    let dom = match FlipbookDom::locate(&document, &options)? {
        Some(dom) => dom,
        None => return Ok(None),
    };

    let machine = FlipbookMachine::new(dom.pages.len(), options.restack_delay_ms);
    let controller = FlipbookController::new(machine, dom);
    controller
        .apply_all(&controller.machine.initial_effects())
        .map_err(|err| SetupError::RenderFailed(format!("{:?}", err)))?;

    let controller = Rc::new(RefCell::new(controller));
    wire_events(&controller, &document);
    Ok(Some(controller))
}

fn wire_events(controller: &Rc<RefCell<FlipbookController>>, document: &Document) {
    let (container, prev_btn, next_btn, fullscreen_btn, pages) = {
        let c = controller.borrow();
        (
            c.dom.container.clone(),
            c.dom.prev_btn.clone(),
            c.dom.next_btn.clone(),
            c.dom.fullscreen_btn.clone(),
            c.dom.pages.clone(),
        )
    };

    {
        let c = Rc::clone(controller);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = c.borrow_mut().prev_page() {
                log::error!("prev-page render failed: {:?}", err);
            }
        });
        prev_btn.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    {
        let c = Rc::clone(controller);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = c.borrow_mut().next_page() {
                log::error!("next-page render failed: {:?}", err);
            }
        });
        next_btn.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    // Click-to-navigate: the left half of a page turns back, the right
    // half turns forward.
    for page in &pages {
        let c = Rc::clone(controller);
        let page_el = page.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = page_el.get_bounding_client_rect();
            let offset_x = event.client_x() as f64 - rect.left();
            let direction = FlipbookMachine::resolve_click(offset_x, rect.width());
            if let Err(err) = c.borrow_mut().navigate(direction) {
                log::error!("page-click render failed: {:?}", err);
            }
        });
        page.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    {
        let c = Rc::clone(controller);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = c.borrow_mut().toggle_fullscreen() {
                log::error!("fullscreen toggle failed: {:?}", err);
            }
        });
        fullscreen_btn.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    // Clicking the container background (not the book or the controls)
    // leaves fullscreen. Child clicks bubble up here with their own
    // target, so only direct background hits pass the identity check.
    {
        let c = Rc::clone(controller);
        let container_el = container.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            if let Some(target) = event.target() {
                let target_js: &JsValue = target.as_ref();
                let container_js: &JsValue = container_el.as_ref();
                if target_js == container_js {
                    if let Err(err) = c.borrow_mut().exit_fullscreen_if_active() {
                        log::error!("fullscreen exit failed: {:?}", err);
                    }
                }
            }
        });
        container.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    {
        let c = Rc::clone(controller);
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                if let Err(err) = c.borrow_mut().exit_fullscreen_if_active() {
                    log::error!("fullscreen exit failed: {:?}", err);
                }
            }
        });
        document.set_onkeydown(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }
}

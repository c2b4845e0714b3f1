//! WASM exports for floating panels
//!
//! This module binds a [`Panel`] to three DOM elements (the panel, its
//! header and its resize handle) so a page can use it directly. Pointer
//! moves and releases are tracked on `window`, not on the panel, so a
//! gesture keeps working when the pointer leaves the panel.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, MouseEvent, Window};

use crate::env::{Environment, DEFAULT_ROOT_FONT_SIZE};
use crate::error::PanelError;
use crate::geometry::PanelStyle;
use crate::input::InputResult;
use crate::math::{Rect, Size, Vec2};
use crate::panel::{Panel, PanelConfig, PanelRegion};
use crate::units::LengthToken;
use crate::bounds::ConstraintStyle;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

// =============================================================================
// Environment
// =============================================================================

/// Environment backed by the live browser window
pub struct BrowserEnvironment {
    window: Window,
}

impl BrowserEnvironment {
    /// Bind to the global `window`
    pub fn new() -> Result<Self, PanelError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(PanelError::Unavailable("window"))
    }
}

impl Environment for BrowserEnvironment {
    fn viewport(&self) -> Size {
        let extent = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Size::new(extent(self.window.inner_width()), extent(self.window.inner_height()))
    }

    fn root_font_size(&self) -> f32 {
        self.window
            .document()
            .and_then(|document| document.document_element())
            .and_then(|root| self.window.get_computed_style(&root).ok().flatten())
            .and_then(|style| style.get_property_value("font-size").ok())
            .map(|value| LengthToken::parse(&value).magnitude)
            .filter(|px| *px > 0.0)
            .unwrap_or(DEFAULT_ROOT_FONT_SIZE)
    }
}

// =============================================================================
// DOM helpers
// =============================================================================

fn dom_err(err: JsValue) -> PanelError {
    PanelError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn to_js(err: PanelError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn measure(element: &HtmlElement) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left() as f32, rect.top() as f32, rect.width() as f32, rect.height() as f32)
}

fn apply_style(element: &HtmlElement, style: &PanelStyle) -> Result<(), PanelError> {
    let decl = element.style();
    for (name, value) in style.properties() {
        decl.set_property(name, value).map_err(dom_err)?;
    }
    decl.set_property("display", if style.visible { "" } else { "none" })
        .map_err(dom_err)
}

fn apply_constraints(element: &HtmlElement, style: &ConstraintStyle) -> Result<(), PanelError> {
    let decl = element.style();
    for (name, value) in style.properties() {
        decl.set_property(name, value).map_err(dom_err)?;
    }
    decl.set_property("position", "fixed").map_err(dom_err)
}

fn pointer_of(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

fn set_cursor(element: &HtmlElement, region: PanelRegion) -> Result<(), PanelError> {
    element.style().set_property("cursor", region.cursor()).map_err(dom_err)
}

/// Detach a listener; a failure only means the listener stays registered
fn remove_listener(target: &EventTarget, name: &str, callback: &Closure<dyn FnMut(MouseEvent)>) {
    if let Err(err) = target.remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref()) {
        log(&format!("[sarc-window] failed to remove {} listener: {}", name, dom_err(err)));
    }
}

/// Read a `"W, H"` size spec from an element's text content.
///
/// Returns `None` when nothing matches `selector` or the text is blank;
/// pass the result as `sizeMin`/`sizeMax`/`sizeDefault` and the usual
/// fallbacks apply.
#[wasm_bindgen]
pub fn size_spec_from_dom(selector: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(selector).ok().flatten()?;
    let text = element.text_content()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

// =============================================================================
// Gesture listeners
// =============================================================================

/// `mousemove`/`mouseup` listeners on `window` for one gesture
///
/// Registered when a gesture starts; dropping the value removes them.
struct GestureListeners {
    target: EventTarget,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
}

impl GestureListeners {
    fn attach(target: EventTarget, inner: Weak<RefCell<Inner>>) -> Result<Self, PanelError> {
        let move_ref = inner.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if let Some(inner) = move_ref.upgrade() {
                inner.borrow_mut().on_pointer_move(&event);
            }
        });
        let on_up = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().on_pointer_up();
            }
        });

        // Built before registering so a failed second add still unwinds the first
        let listeners = Self { target, on_move, on_up };
        listeners
            .target
            .add_event_listener_with_callback("mousemove", listeners.on_move.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        listeners
            .target
            .add_event_listener_with_callback("mouseup", listeners.on_up.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        Ok(listeners)
    }

    fn detach(&self) {
        remove_listener(&self.target, "mousemove", &self.on_move);
        remove_listener(&self.target, "mouseup", &self.on_up);
    }
}

impl Drop for GestureListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

// =============================================================================
// Panel state shared with listeners
// =============================================================================

#[derive(Clone, Copy)]
enum GestureKind {
    Drag,
    Resize,
}

struct Inner {
    panel: Panel,
    env: BrowserEnvironment,
    element: HtmlElement,
    listeners: Option<GestureListeners>,
    /// Listeners detached from inside their own `mouseup` callback. A
    /// closure can't be freed while it runs, so it is dropped on the next
    /// gesture end instead.
    retired: Option<GestureListeners>,
    this: Weak<RefCell<Inner>>,
}

impl Inner {
    fn apply(&self, result: &InputResult) {
        if let Some(style) = result.style() {
            if let Err(err) = apply_style(&self.element, style) {
                log(&format!("[sarc-window] failed to apply style: {}", err));
            }
        }
    }

    fn start_gesture(&mut self, event: &MouseEvent, kind: GestureKind) {
        let pointer = pointer_of(event);
        let rendered = Some(measure(&self.element));
        let result = match kind {
            GestureKind::Drag => self.panel.begin_drag(pointer, rendered),
            GestureKind::Resize => self.panel.begin_resize(pointer, rendered, &self.env),
        };

        // Only a newly started gesture reports an update
        if result.style().is_none() {
            return;
        }
        self.apply(&result);

        let target: EventTarget = self.env.window.clone().into();
        match GestureListeners::attach(target, self.this.clone()) {
            Ok(listeners) => self.listeners = Some(listeners),
            Err(err) => {
                log(&format!("[sarc-window] failed to track gesture: {}", err));
                self.panel.pointer_cancel();
            }
        }
    }

    fn on_pointer_move(&mut self, event: &MouseEvent) {
        let result = self.panel.pointer_move(pointer_of(event), &self.env);
        self.apply(&result);
    }

    fn on_pointer_up(&mut self) {
        self.panel.pointer_up();
        self.release_listeners();
    }

    fn release_listeners(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            listeners.detach();
            self.retired = Some(listeners);
        }
    }
}

// =============================================================================
// Exported panel
// =============================================================================

/// Floating panel bound to DOM elements
#[wasm_bindgen]
pub struct FloatingPanel {
    inner: Rc<RefCell<Inner>>,
    header: HtmlElement,
    handle: HtmlElement,
    on_header_down: Closure<dyn FnMut(MouseEvent)>,
    on_handle_down: Closure<dyn FnMut(MouseEvent)>,
}

#[wasm_bindgen]
impl FloatingPanel {
    /// Bind a panel to its element, header and resize handle.
    ///
    /// `options` is a JSON object (`title`, `sizeMin`, `sizeMax`,
    /// `sizeDefault`, `closePolicy`); omit it for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: HtmlElement,
        header: HtmlElement,
        handle: HtmlElement,
        options: Option<String>,
    ) -> Result<FloatingPanel, JsValue> {
        let config = match options {
            Some(json) => PanelConfig::from_json(&json).map_err(to_js)?,
            None => PanelConfig::default(),
        };
        let env = BrowserEnvironment::new().map_err(to_js)?;
        let panel = Panel::new(config);

        apply_constraints(&element, &panel.constraint_style()).map_err(to_js)?;
        apply_style(&element, &panel.style()).map_err(to_js)?;
        set_cursor(&header, PanelRegion::Header).map_err(to_js)?;
        set_cursor(&handle, PanelRegion::ResizeHandle).map_err(to_js)?;

        let inner = Rc::new_cyclic(|this| {
            RefCell::new(Inner {
                panel,
                env,
                element,
                listeners: None,
                retired: None,
                this: this.clone(),
            })
        });

        let weak = Rc::downgrade(&inner);
        let on_header_down = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().start_gesture(&event, GestureKind::Drag);
            }
        });

        let weak = Rc::downgrade(&inner);
        let on_handle_down = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            // Keep an enclosing header from starting a drag on the same press
            event.stop_propagation();
            event.prevent_default();
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().start_gesture(&event, GestureKind::Resize);
            }
        });

        header
            .add_event_listener_with_callback("mousedown", on_header_down.as_ref().unchecked_ref())
            .map_err(|e| to_js(dom_err(e)))?;
        handle
            .add_event_listener_with_callback("mousedown", on_handle_down.as_ref().unchecked_ref())
            .map_err(|e| to_js(dom_err(e)))?;

        Ok(FloatingPanel {
            inner,
            header,
            handle,
            on_header_down,
            on_handle_down,
        })
    }

    /// Show the panel (centers it on first open)
    #[wasm_bindgen]
    pub fn open(&self) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let result = inner.panel.open(&inner.env);
        inner.apply(&result);
    }

    /// Hide the panel, ending any gesture
    #[wasm_bindgen]
    pub fn close(&self) {
        let mut inner = self.inner.borrow_mut();
        let result = inner.panel.close();
        inner.release_listeners();
        inner.apply(&result);
    }

    /// Flip visibility
    #[wasm_bindgen]
    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Check if the panel is visible
    #[wasm_bindgen]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().panel.is_open()
    }

    /// Header title from the options
    #[wasm_bindgen]
    pub fn title(&self) -> String {
        self.inner.borrow().panel.title().to_string()
    }

    /// End the active gesture (pointercancel, window blur)
    #[wasm_bindgen]
    pub fn cancel_gesture(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.panel.pointer_cancel();
        inner.release_listeners();
    }

    /// Current inline style as JSON
    #[wasm_bindgen]
    pub fn get_style_json(&self) -> String {
        serde_json::to_string(&self.inner.borrow().panel.style()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Drop for FloatingPanel {
    fn drop(&mut self) {
        remove_listener(&self.header, "mousedown", &self.on_header_down);
        remove_listener(&self.handle, "mousedown", &self.on_handle_down);
    }
}

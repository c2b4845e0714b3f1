//! Browser tests for the wasm bindings
//!
//! Run with `wasm-pack test --headless --chrome -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use sarc_window::FloatingPanel;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{EventTarget, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const SMALL_PANEL: &str = r#"{"sizeMin":"10px, 10px","sizeDefault":"100px, 80px"}"#;

fn div_in(parent: &web_sys::Node) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    parent.append_child(&element).unwrap();
    element.dyn_into::<HtmlElement>().unwrap()
}

fn div() -> HtmlElement {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    div_in(&body)
}

fn window_target() -> EventTarget {
    web_sys::window().unwrap().into()
}

/// Dispatch a bubbling mouse event at client coordinates
fn fire(target: &EventTarget, kind: &str, x: f64, y: f64) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x as i32);
    init.set_client_y(y as i32);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Numeric value of a `"Npx"` style field
fn style_px(panel: &FloatingPanel, field: &str) -> f64 {
    let style: serde_json::Value = serde_json::from_str(&panel.get_style_json()).unwrap();
    style[field].as_str().unwrap().trim_end_matches("px").parse().unwrap()
}

fn open_small_panel() -> (FloatingPanel, HtmlElement, HtmlElement) {
    let element = div();
    let header = div_in(&element);
    let handle = div_in(&element);
    let panel =
        FloatingPanel::new(element, header.clone(), handle.clone(), Some(SMALL_PANEL.to_string())).unwrap();
    panel.open();
    (panel, header, handle)
}

#[wasm_bindgen_test]
fn test_open_close_cycle() {
    let panel = FloatingPanel::new(div(), div(), div(), Some(r#"{"title":"Smoke"}"#.to_string())).unwrap();
    assert!(!panel.is_open());
    assert_eq!(panel.title(), "Smoke");

    panel.open();
    assert!(panel.is_open());
    assert!(panel.get_style_json().contains(r#""visible":true"#));

    panel.toggle();
    assert!(!panel.is_open());
}

#[wasm_bindgen_test]
fn test_invalid_options_rejected() {
    assert!(FloatingPanel::new(div(), div(), div(), Some("{".to_string())).is_err());
}

#[wasm_bindgen_test]
fn test_cursors_applied() {
    let (_panel, header, handle) = open_small_panel();
    assert_eq!(header.style().get_property_value("cursor").unwrap(), "move");
    assert_eq!(handle.style().get_property_value("cursor").unwrap(), "nwse-resize");
}

#[wasm_bindgen_test]
fn test_header_drag_follows_window_moves() {
    let (panel, header, _handle) = open_small_panel();
    let left = style_px(&panel, "left");
    let top = style_px(&panel, "top");

    fire(&header, "mousedown", 50.0, 50.0);
    fire(&window_target(), "mousemove", 40.0, 45.0);

    assert!((style_px(&panel, "left") - (left - 10.0)).abs() < 0.01);
    assert!((style_px(&panel, "top") - (top - 5.0)).abs() < 0.01);
    assert!((style_px(&panel, "width") - 100.0).abs() < 0.01);
}

#[wasm_bindgen_test]
fn test_mouseup_detaches_move_listener() {
    let (panel, header, _handle) = open_small_panel();

    fire(&header, "mousedown", 50.0, 50.0);
    fire(&window_target(), "mousemove", 40.0, 40.0);
    fire(&window_target(), "mouseup", 40.0, 40.0);
    let after_release = panel.get_style_json();

    fire(&window_target(), "mousemove", 20.0, 20.0);
    assert_eq!(panel.get_style_json(), after_release);
}

#[wasm_bindgen_test]
fn test_cancel_gesture_detaches_move_listener() {
    let (panel, header, _handle) = open_small_panel();

    fire(&header, "mousedown", 50.0, 50.0);
    fire(&window_target(), "mousemove", 45.0, 45.0);
    panel.cancel_gesture();
    let after_cancel = panel.get_style_json();

    fire(&window_target(), "mousemove", 20.0, 20.0);
    assert_eq!(panel.get_style_json(), after_cancel);
}

#[wasm_bindgen_test]
fn test_close_detaches_move_listener() {
    let (panel, header, _handle) = open_small_panel();

    fire(&header, "mousedown", 50.0, 50.0);
    panel.close();
    let after_close = panel.get_style_json();

    fire(&window_target(), "mousemove", 20.0, 20.0);
    assert_eq!(panel.get_style_json(), after_close);
}

#[wasm_bindgen_test]
fn test_handle_inside_header_resizes_without_dragging() {
    let element = div();
    let header = div_in(&element);
    let handle = div_in(&header);
    let panel = FloatingPanel::new(element, header, handle.clone(), Some(SMALL_PANEL.to_string())).unwrap();
    panel.open();
    let left = style_px(&panel, "left");

    fire(&handle, "mousedown", 50.0, 50.0);
    fire(&window_target(), "mousemove", 40.0, 30.0);

    // Anchored at the top-left: only the size changes
    assert!((style_px(&panel, "left") - left).abs() < 0.01);
    assert!((style_px(&panel, "width") - 90.0).abs() < 0.01);
    assert!((style_px(&panel, "height") - 60.0).abs() < 0.01);
    fire(&window_target(), "mouseup", 40.0, 30.0);
}

//! Browser tests for the DOM seams. Run with `wasm-pack test --headless --firefox frame-ui`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use frame_controller::{FrameHandle, HostSurface, PointerListeners};
use frame_ui::{measure_content_box, DomHost, DomPointerListeners, ElementFocus};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_host(style: &str) -> (web_sys::Element, web_sys::Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_attribute("style", style).unwrap();
    let root = document.create_element("div").unwrap();
    root.set_attribute("tabindex", "0").unwrap();
    host.append_child(&root).unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    (host, root)
}

#[wasm_bindgen_test]
fn content_box_excludes_padding() {
    let (host, _root) = mount_host("width: 600px; height: 400px; padding: 10px 20px; box-sizing: content-box;");
    let bounds = measure_content_box(&host).unwrap();
    assert_eq!(bounds.width, 600.0);
    assert_eq!(bounds.height, 400.0);
}

#[wasm_bindgen_test]
fn dom_host_measures_parent_of_root() {
    let (_host, root) = mount_host("width: 640px; height: 480px;");
    let host = DomHost::new(Rc::new(RefCell::new(Some(root))));
    let bounds = host.content_bounds().unwrap();
    assert_eq!(bounds.width, 640.0);
    assert_eq!(bounds.height, 480.0);
}

#[wasm_bindgen_test]
fn dom_host_without_root_is_unavailable() {
    let host = DomHost::new(Rc::new(RefCell::new(None)));
    assert!(host.content_bounds().is_none());
    assert!(host.viewport_bounds().width > 0.0);
}

#[wasm_bindgen_test]
fn listeners_only_fire_while_subscribed() {
    let moves = Rc::new(RefCell::new(0u32));
    let counter = moves.clone();
    let mut listeners = DomPointerListeners::new(move |_| *counter.borrow_mut() += 1, |_| {});

    let window = web_sys::window().unwrap();
    let dispatch = || {
        let event = web_sys::PointerEvent::new("pointermove").unwrap();
        window.dispatch_event(&event).unwrap();
    };

    dispatch();
    assert_eq!(*moves.borrow(), 0);

    listeners.subscribe();
    listeners.subscribe();
    dispatch();
    assert_eq!(*moves.borrow(), 1);

    listeners.unsubscribe();
    listeners.unsubscribe();
    dispatch();
    assert_eq!(*moves.borrow(), 1);
}

#[wasm_bindgen_test]
fn handle_focuses_root_element() {
    let (_host, root) = mount_host("width: 100px; height: 100px;");
    let handle = FrameHandle::new(ElementFocus::new(Rc::new(RefCell::new(Some(root.clone())))));
    assert!(handle.focus());

    let document = web_sys::window().unwrap().document().unwrap();
    let active = document.active_element().unwrap();
    assert!(active.is_same_node(Some(root.as_ref())));
}

//! DOM-backed implementations of the frame controller's seams

use std::cell::RefCell;
use std::rc::Rc;

use frame_controller::{FocusTarget, HostSurface, PointerListeners};
use frame_types::{HostBounds, PointerInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Root element of a mounted frame, filled in by `onmounted`
pub type ElementSlot = Rc<RefCell<Option<web_sys::Element>>>;

type PointerClosure = Closure<dyn FnMut(web_sys::PointerEvent)>;

/// Get the browser viewport dimensions
pub fn viewport_bounds() -> HostBounds {
    let Some(window) = web_sys::window() else {
        return HostBounds::default();
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    if width > 0.0 && height > 0.0 {
        return HostBounds::new(width, height);
    }

    let root = window.document().and_then(|d| d.document_element());
    match root {
        Some(root) => HostBounds::new(
            root.client_width().max(0) as f64,
            root.client_height().max(0) as f64,
        ),
        None => HostBounds::default(),
    }
}

/// Content box of `element` in CSS pixels: client size minus padding.
pub fn measure_content_box(element: &web_sys::Element) -> Option<HostBounds> {
    let window = web_sys::window()?;
    let style = window.get_computed_style(element).ok()??;
    let px = |property: &str| -> f64 {
        style
            .get_property_value(property)
            .ok()
            .and_then(|value| value.trim().trim_end_matches("px").parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    let width = element.client_width() as f64 - px("padding-left") - px("padding-right");
    let height = element.client_height() as f64 - px("padding-top") - px("padding-bottom");
    if width > 0.0 && height > 0.0 {
        Some(HostBounds::new(width, height))
    } else {
        None
    }
}

pub fn pointer_input(event: &web_sys::PointerEvent) -> PointerInput {
    PointerInput::new(
        event.pointer_id(),
        event.client_x() as f64,
        event.client_y() as f64,
    )
}

// ============================================================================
// Host
// ============================================================================

/// The frame's parent element, measured each time it is asked
pub struct DomHost {
    root: ElementSlot,
}

impl DomHost {
    pub fn new(root: ElementSlot) -> Self {
        Self { root }
    }

    pub fn container(&self) -> Option<web_sys::Element> {
        self.root.borrow().as_ref()?.parent_element()
    }
}

impl HostSurface for DomHost {
    fn content_bounds(&self) -> Option<HostBounds> {
        measure_content_box(&self.container()?)
    }

    fn viewport_bounds(&self) -> HostBounds {
        viewport_bounds()
    }
}

/// Keeps a `ResizeObserver` on the host alive; disconnects on drop.
pub struct HostResizeWatch {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>,
}

impl HostResizeWatch {
    pub fn observe(host: &web_sys::Element, mut on_resize: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |_entries: js_sys::Array, _observer: web_sys::ResizeObserver| on_resize(),
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>);

        let observer = match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("ResizeObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(host);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for HostResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// ============================================================================
// Global pointer listeners
// ============================================================================

/// pointermove / pointerup on `window`, attached only while a session runs.
///
/// The closures live as long as this value; subscribing and unsubscribing
/// only adds and removes them on the window.
pub struct DomPointerListeners {
    on_move: PointerClosure,
    on_up: PointerClosure,
}

impl DomPointerListeners {
    pub fn new(
        mut on_move: impl FnMut(PointerInput) + 'static,
        mut on_up: impl FnMut(PointerInput) + 'static,
    ) -> Self {
        let on_move = Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
            on_move(pointer_input(&e))
        }) as Box<dyn FnMut(web_sys::PointerEvent)>);
        let on_up = Closure::wrap(Box::new(move |e: web_sys::PointerEvent| {
            on_up(pointer_input(&e))
        }) as Box<dyn FnMut(web_sys::PointerEvent)>);

        Self { on_move, on_up }
    }
}

impl PointerListeners for DomPointerListeners {
    fn subscribe(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let added = window
            .add_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref())
            .and_then(|_| {
                window.add_event_listener_with_callback(
                    "pointerup",
                    self.on_up.as_ref().unchecked_ref(),
                )
            });
        if let Err(e) = added {
            log::warn!("failed to add pointer listeners: {:?}", e);
        }
    }

    fn unsubscribe(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = window
            .remove_event_listener_with_callback("pointerup", self.on_up.as_ref().unchecked_ref());
    }
}

// ============================================================================
// Focus
// ============================================================================

/// Focuses the frame's root element once it is mounted
pub struct ElementFocus {
    root: ElementSlot,
}

impl ElementFocus {
    pub fn new(root: ElementSlot) -> Self {
        Self { root }
    }
}

impl FocusTarget for ElementFocus {
    fn focus(&self) -> bool {
        self.root
            .borrow()
            .as_ref()
            .and_then(|element| element.dyn_ref::<web_sys::HtmlElement>())
            .map(|element| element.focus().is_ok())
            .unwrap_or(false)
    }
}

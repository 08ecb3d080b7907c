use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use dioxus_web::WebEventExt;
use frame_controller::{FrameCallbacks, FrameHandle};
use frame_types::{
    FrameOptions, Geometry, PointerInput, Position, ResizeDirection, Size, DEFAULT_MIN_HEIGHT,
    DEFAULT_MIN_WIDTH,
};
use wasm_bindgen::JsCast;

use crate::frame::{FrameView, MountedFrame};
use crate::interop::{ElementFocus, ElementSlot};

const EDGE_HANDLE_PX: u32 = 6;
const CORNER_HANDLE_PX: u32 = 12;

fn pointer_input(e: &PointerEvent) -> PointerInput {
    let point = e.data().client_coordinates();
    PointerInput::new(e.data().pointer_id(), point.x, point.y)
}

fn pointer_target_is_window_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("button").ok().flatten().is_some()
                || element.closest(".window-controls").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

fn handle_style(direction: ResizeDirection) -> String {
    let edge = EDGE_HANDLE_PX;
    let corner = CORNER_HANDLE_PX;
    let placement = match direction {
        ResizeDirection::N => format!("top: 0; left: {corner}px; right: {corner}px; height: {edge}px;"),
        ResizeDirection::S => format!("bottom: 0; left: {corner}px; right: {corner}px; height: {edge}px;"),
        ResizeDirection::E => format!("right: 0; top: {corner}px; bottom: {corner}px; width: {edge}px;"),
        ResizeDirection::W => format!("left: 0; top: {corner}px; bottom: {corner}px; width: {edge}px;"),
        ResizeDirection::NE => format!("top: 0; right: 0; width: {corner}px; height: {corner}px;"),
        ResizeDirection::NW => format!("top: 0; left: 0; width: {corner}px; height: {corner}px;"),
        ResizeDirection::SE => format!("bottom: 0; right: 0; width: {corner}px; height: {corner}px;"),
        ResizeDirection::SW => format!("bottom: 0; left: 0; width: {corner}px; height: {corner}px;"),
    };
    format!(
        "position: absolute; {placement} cursor: {}; touch-action: none; z-index: 5;",
        direction.cursor()
    )
}

/// A movable, resizable panel positioned inside its parent element.
///
/// The parent is the host surface: drags and resizes are clamped to its
/// content box, and maximize fills it. Close and minimize are only
/// reported through the callbacks.
#[component]
pub fn FloatingWindow(
    title: String,
    children: Element,
    icon: Option<String>,
    status_text: Option<String>,
    #[props(default = true)] draggable: bool,
    #[props(default = true)] resizable: bool,
    initial_position: Option<Position>,
    initial_size: Option<Size>,
    #[props(default = DEFAULT_MIN_WIDTH)] min_width: f64,
    #[props(default = DEFAULT_MIN_HEIGHT)] min_height: f64,
    on_close: Option<EventHandler<()>>,
    on_minimize: Option<EventHandler<()>>,
    on_maximize: Option<EventHandler<()>>,
    on_ready: Option<EventHandler<FrameHandle>>,
) -> Element {
    let options = use_hook(|| {
        let defaults = FrameOptions::default();
        FrameOptions {
            title: title.clone(),
            status_text: status_text.clone(),
            draggable,
            resizable,
            initial_position: initial_position.unwrap_or(defaults.initial_position),
            initial_size: initial_size.unwrap_or(defaults.initial_size),
            min_width,
            min_height,
            ..defaults
        }
    });
    let geometry = use_signal(|| options.mount_geometry());
    let maximized = use_signal(|| false);
    let root: ElementSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let mounted = use_hook(|| {
        let callbacks = FrameCallbacks::new()
            .on_close(move || {
                if let Some(handler) = on_close {
                    handler.call(());
                }
            })
            .on_minimize(move || {
                if let Some(handler) = on_minimize {
                    handler.call(());
                }
            })
            .on_maximize(move || {
                if let Some(handler) = on_maximize {
                    handler.call(());
                }
            });

        MountedFrame::mount(options.clone(), root.clone(), FrameView { geometry, maximized }, callbacks)
            .map_err(|e| {
                warn!("invalid window options for {:?}: {}", title, e);
                e.to_string()
            })
    });

    {
        let mounted = mounted.clone();
        use_drop(move || {
            if let Ok(frame) = &mounted {
                frame.unmount();
            }
        });
    }

    let frame = match mounted {
        Ok(frame) => frame,
        Err(err) => {
            return rsx! {
                div {
                    class: "floating-window-error",
                    style: "padding: 1rem; color: var(--text-muted, #6b7280);",
                    "Invalid window options: {err}"
                }
            };
        }
    };

    let frame_for_mount = frame.clone();
    let frame_for_drag = frame.clone();
    let frame_for_double = frame.clone();
    let frame_for_minimize = frame.clone();
    let frame_for_toggle = frame.clone();
    let frame_for_close = frame.clone();
    let root_for_mount = root.clone();

    let is_maximized = maximized();
    let Geometry { position, size } = geometry();
    let can_drag = draggable && !is_maximized;
    let show_handles = resizable && !is_maximized;
    let titlebar_cursor = if can_drag { "grab" } else { "default" };
    let window_style = format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; \
         display: flex; flex-direction: column; background: var(--window-bg, #1f2937); \
         border: 1px solid var(--border-color, #374151); border-radius: var(--radius-lg, 8px); \
         overflow: hidden; box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5)); outline: none;",
        position.x, position.y, size.width, size.height
    );

    let handles = ResizeDirection::ALL.into_iter().map(|direction| {
        let frame = frame.clone();
        rsx! {
            div {
                key: "{direction}",
                class: "resize-handle resize-handle-{direction}",
                style: "{handle_style(direction)}",
                onpointerdown: move |e: PointerEvent| {
                    e.stop_propagation();
                    let pointer = pointer_input(&e);
                    let started = frame
                        .update(|f| f.begin_resize(direction, pointer))
                        .unwrap_or(false);
                    if started {
                        e.prevent_default();
                    }
                },
            }
        }
    });

    rsx! {
        div {
            class: if is_maximized { "floating-window maximized" } else { "floating-window" },
            role: "dialog",
            "aria-label": title.clone(),
            tabindex: "0",
            style: "{window_style}",
            onmounted: move |e: MountedEvent| {
                let Some(element) = e.data().try_as_web_event() else {
                    return;
                };
                *root_for_mount.borrow_mut() = Some(element);
                frame_for_mount.watch_host();
                if let Some(on_ready) = on_ready {
                    on_ready.call(FrameHandle::new(ElementFocus::new(root_for_mount.clone())));
                }
            },

            div {
                class: "window-titlebar",
                style: "display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0.75rem; background: var(--titlebar-bg, #111827); border-bottom: 1px solid var(--border-color, #374151); cursor: {titlebar_cursor}; user-select: none; touch-action: none;",
                onpointerdown: move |e: PointerEvent| {
                    if pointer_target_is_window_control(&e) {
                        return;
                    }
                    if frame_for_drag.begin_drag(pointer_input(&e)) {
                        e.prevent_default();
                    }
                },
                ondoubleclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    frame_for_double.update(|f| f.double_activate());
                },

                div {
                    style: "display: flex; align-items: center; gap: 0.5rem; min-width: 0;",
                    if let Some(icon) = icon.clone() {
                        span { class: "window-icon", style: "font-size: 1rem;", "{icon}" }
                    }
                    span {
                        style: "font-weight: 500; color: var(--text-primary, white); white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                        "{title}"
                    }
                }

                WindowControls {
                    maximized: is_maximized,
                    resizable,
                    on_minimize: move |_| {
                        frame_for_minimize.update(|f| f.minimize());
                    },
                    on_toggle_maximize: move |_| {
                        frame_for_toggle.update(|f| f.maximize());
                    },
                    on_close: move |_| {
                        frame_for_close.update(|f| f.close());
                    },
                }
            }

            div {
                class: "window-content",
                style: "flex: 1; overflow: auto;",
                {children}
            }

            if let Some(text) = status_text.clone() {
                div {
                    class: "window-statusbar",
                    style: "padding: 0.25rem 0.75rem; font-size: 0.75rem; color: var(--text-muted, #9ca3af); border-top: 1px solid var(--border-color, #374151);",
                    "{text}"
                }
            }

            if show_handles {
                {handles}
            }
        }
    }
}

#[component]
fn WindowControls(
    maximized: bool,
    resizable: bool,
    on_minimize: EventHandler<()>,
    on_toggle_maximize: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let button_style = "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;";

    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; align-items: center; gap: 0.25rem;",

            button {
                style: "{button_style} color: #facc15;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Minimize",
                onclick: move |e| {
                    e.stop_propagation();
                    on_minimize.call(());
                },
                "−"
            }
            if resizable {
                button {
                    style: "{button_style} color: #22c55e;",
                    onpointerdown: move |e| e.stop_propagation(),
                    "aria-label": if maximized { "Restore" } else { "Maximize" },
                    onclick: move |e| {
                        e.stop_propagation();
                        on_toggle_maximize.call(());
                    },
                    if maximized { "❐" } else { "□" }
                }
            }
            button {
                class: "window-close",
                style: "{button_style} color: #ef4444; font-size: 1.25rem; line-height: 1;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(());
                },
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_styles_use_direction_cursor() {
        for direction in ResizeDirection::ALL {
            let style = handle_style(direction);
            assert!(style.contains(direction.cursor()), "{direction}: {style}");
            assert!(style.starts_with("position: absolute;"));
        }
    }

    #[test]
    fn corner_handles_are_square() {
        let style = handle_style(ResizeDirection::SE);
        assert!(style.contains(&format!("width: {CORNER_HANDLE_PX}px; height: {CORNER_HANDLE_PX}px;")));
        let style = handle_style(ResizeDirection::N);
        assert!(style.contains(&format!("height: {EDGE_HANDLE_PX}px;")));
    }
}

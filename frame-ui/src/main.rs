use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

use frame_controller::FrameHandle;
use frame_types::{Position, Size, TASKBAR_RESERVED_HEIGHT};
use frame_ui::FloatingWindow;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[derive(Clone, Copy, PartialEq)]
struct Topic {
    title: &'static str,
    icon: &'static str,
    summary: &'static str,
}

const TOPICS: [Topic; 2] = [
    Topic {
        title: "Binary Search",
        icon: "🔍",
        summary: "Halve a sorted range until the target is found or the range is empty. O(log n).",
    },
    Topic {
        title: "Quicksort",
        icon: "⚡",
        summary: "Partition around a pivot, then sort each side. O(n log n) on average.",
    },
];

#[component]
fn App() -> Element {
    let mut open = use_signal(|| vec![true; TOPICS.len()]);
    let mut handles = use_signal(Vec::<FrameHandle>::new);

    rsx! {
        div {
            class: "frame-host",
            style: "position: fixed; inset: 0; overflow: hidden; background-color: #0f172a; color: white;",

            for (index, topic) in TOPICS.iter().copied().enumerate() {
                if open.read()[index] {
                    FloatingWindow {
                        key: "{topic.title}",
                        title: topic.title.to_string(),
                        icon: topic.icon.to_string(),
                        status_text: "Algorithms".to_string(),
                        initial_position: Position::new(60.0 + 260.0 * index as f64, 60.0 + 40.0 * index as f64),
                        initial_size: Size::new(420.0, 300.0),
                        on_close: move |_| {
                            info!("close requested: {}", topic.title);
                            open.write()[index] = false;
                        },
                        on_minimize: move |_| info!("minimize requested: {}", topic.title),
                        on_maximize: move |_| info!("maximized: {}", topic.title),
                        on_ready: move |handle: FrameHandle| handles.write().push(handle),
                        div {
                            style: "padding: 1rem; line-height: 1.5;",
                            "{topic.summary}"
                        }
                    }
                }
            }

            div {
                class: "taskbar",
                style: "position: absolute; left: 0; right: 0; bottom: 0; height: {TASKBAR_RESERVED_HEIGHT}px; display: flex; align-items: center; gap: 0.5rem; padding: 0 0.75rem; background: #111827; border-top: 1px solid #374151;",
                button {
                    style: "background: transparent; color: white; border: 1px solid #374151; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| {
                        if let Some(handle) = handles.read().last() {
                            handle.focus();
                        }
                    },
                    "Focus last window"
                }
            }
        }
    }
}

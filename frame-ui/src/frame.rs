//! Glue between one `FrameController` and the Dioxus signals that render it

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use frame_controller::{FrameCallbacks, FrameController, FrameError, FrameOptions};
use frame_types::{Geometry, PointerInput};

use crate::interop::{DomHost, DomPointerListeners, ElementSlot, HostResizeWatch};

pub type DomFrame = FrameController<DomHost, DomPointerListeners>;

type FrameCell = Rc<RefCell<Option<DomFrame>>>;

/// What the renderer reads. Written only when the controller's value differs,
/// so the signals must start out holding the controller's mount geometry.
#[derive(Clone, Copy)]
pub struct FrameView {
    pub geometry: Signal<Geometry>,
    pub maximized: Signal<bool>,
}

impl FrameView {
    fn publish(&self, frame: &DomFrame) {
        let mut geometry = self.geometry;
        let mut maximized = self.maximized;

        let next = frame.geometry();
        if *geometry.peek() != next {
            geometry.set(next);
        }
        if *maximized.peek() != frame.is_maximized() {
            maximized.set(frame.is_maximized());
        }
    }
}

/// A controller owned by one `FloatingWindow` instance
#[derive(Clone)]
pub struct MountedFrame {
    cell: FrameCell,
    view: FrameView,
    host_watch: Rc<RefCell<Option<HostResizeWatch>>>,
}

impl MountedFrame {
    /// Build the controller. Global listeners reach back through a weak
    /// reference so the controller owning them is not kept alive by them.
    pub fn mount(
        options: FrameOptions,
        root: ElementSlot,
        view: FrameView,
        callbacks: FrameCallbacks,
    ) -> Result<Self, FrameError> {
        let cell: FrameCell = Rc::new(RefCell::new(None));

        let weak_move = Rc::downgrade(&cell);
        let weak_up = Rc::downgrade(&cell);
        let listeners = DomPointerListeners::new(
            move |pointer| dispatch(&weak_move, view, |frame| frame.pointer_move(pointer)),
            move |pointer| dispatch(&weak_up, view, |frame| frame.pointer_up(pointer)),
        );

        let controller =
            FrameController::new(options, DomHost::new(root), listeners)?.with_callbacks(callbacks);
        *cell.borrow_mut() = Some(controller);

        Ok(Self {
            cell,
            view,
            host_watch: Rc::new(RefCell::new(None)),
        })
    }

    /// Run `f` against the controller and publish the result.
    pub fn update<R>(&self, f: impl FnOnce(&mut DomFrame) -> R) -> Option<R> {
        let mut slot = self.cell.try_borrow_mut().ok()?;
        let frame = slot.as_mut()?;
        let result = f(frame);
        self.view.publish(frame);
        Some(result)
    }

    pub fn begin_drag(&self, pointer: PointerInput) -> bool {
        self.update(|frame| frame.begin_drag(pointer)).unwrap_or(false)
    }

    /// Start watching the host for size changes. Call once the root is in
    /// the document.
    pub fn watch_host(&self) {
        let container = self
            .cell
            .borrow()
            .as_ref()
            .and_then(|frame| frame.host().container());
        let Some(container) = container else {
            warn!("frame mounted without a host container, using viewport");
            return;
        };

        let weak = Rc::downgrade(&self.cell);
        let view = self.view;
        let watch = HostResizeWatch::observe(&container, move || {
            dispatch(&weak, view, |frame| frame.host_resized());
        });
        *self.host_watch.borrow_mut() = watch;
    }

    pub fn unmount(&self) {
        self.host_watch.borrow_mut().take();
        if let Ok(mut slot) = self.cell.try_borrow_mut() {
            if let Some(frame) = slot.as_mut() {
                frame.unmount();
            }
        }
    }
}

fn dispatch<R>(cell: &Weak<RefCell<Option<DomFrame>>>, view: FrameView, f: impl FnOnce(&mut DomFrame) -> R) {
    let Some(cell) = cell.upgrade() else {
        return;
    };
    let Ok(mut slot) = cell.try_borrow_mut() else {
        return;
    };
    if let Some(frame) = slot.as_mut() {
        f(frame);
        view.publish(frame);
    }
}

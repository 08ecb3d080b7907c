//! Seams between the controller and whatever hosts the frame

use frame_types::HostBounds;

/// Pull-based access to the host's dimensions.
///
/// Queried on demand and on host-resize notification, never cached by the
/// controller.
pub trait HostSurface {
    /// Current content box of the host container, `None` when the
    /// container is not available.
    fn content_bounds(&self) -> Option<HostBounds>;

    /// Full available viewport, used in place of a missing host.
    fn viewport_bounds(&self) -> HostBounds;
}

/// Global pointer-move / pointer-up listeners.
///
/// Subscribed when a session starts and unsubscribed when it ends or the
/// frame unmounts. `unsubscribe` must tolerate being called while nothing
/// is subscribed.
pub trait PointerListeners {
    fn subscribe(&mut self);
    fn unsubscribe(&mut self);
}

/// Host with fixed dimensions, for embedders that measure elsewhere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticHost {
    pub content: Option<HostBounds>,
    pub viewport: HostBounds,
}

impl StaticHost {
    pub fn new(width: f64, height: f64) -> Self {
        let bounds = HostBounds::new(width, height);
        Self {
            content: Some(bounds),
            viewport: bounds,
        }
    }

    /// Host whose container is missing; only the viewport is known
    pub fn detached(viewport: HostBounds) -> Self {
        Self {
            content: None,
            viewport,
        }
    }
}

impl HostSurface for StaticHost {
    fn content_bounds(&self) -> Option<HostBounds> {
        self.content
    }

    fn viewport_bounds(&self) -> HostBounds {
        self.viewport
    }
}

impl<H: HostSurface + ?Sized> HostSurface for &H {
    fn content_bounds(&self) -> Option<HostBounds> {
        (**self).content_bounds()
    }

    fn viewport_bounds(&self) -> HostBounds {
        (**self).viewport_bounds()
    }
}

/// Listener set that does nothing, for frames driven without global events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoListeners;

impl PointerListeners for NoListeners {
    fn subscribe(&mut self) {}
    fn unsubscribe(&mut self) {}
}

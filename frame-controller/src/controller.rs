//! Window frame controller
//!
//! Owns one frame's geometry and drives it from pointer input:
//! - pointer-down on the drag surface or a resize handle opens a session
//!   and subscribes the global move/up listeners
//! - pointer-move from the session's pointer updates geometry through the
//!   viewport clamp
//! - pointer-up from the session's pointer closes the session and
//!   unsubscribes
//!
//! Maximize toggles between a host-filling geometry and the geometry saved
//! when maximize began. Geometry is written only when the computed value
//! differs from the current one; mutating calls return whether a write
//! happened so renderers can skip no-op updates.

use frame_types::{FrameOptions, Geometry, HostBounds, PointerInput, Position, ResizeDirection, Size};
use tracing::{debug, trace};

use crate::callbacks::FrameCallbacks;
use crate::clamp::{clamp_position, clamp_resized, maximized_geometry};
use crate::config::validate_options;
use crate::error::FrameError;
use crate::host::{HostSurface, PointerListeners};
use crate::interaction::{DragSession, Interaction, ResizeSession};
use crate::resize::resize_geometry;

/// Normal or maximized. The saved geometry exists exactly while maximized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FrameMode {
    #[default]
    Normal,
    Maximized {
        restore_to: Geometry,
    },
}

pub struct FrameController<H: HostSurface, L: PointerListeners> {
    options: FrameOptions,
    geometry: Geometry,
    interaction: Interaction,
    mode: FrameMode,
    host: H,
    listeners: L,
    callbacks: FrameCallbacks,
}

impl<H: HostSurface, L: PointerListeners> FrameController<H, L> {
    /// Mount a frame from caller options.
    ///
    /// The initial size is raised to the minimum if needed; the initial
    /// position is taken as given.
    pub fn new(options: FrameOptions, host: H, listeners: L) -> Result<Self, FrameError> {
        validate_options(&options)?;

        let geometry = options.mount_geometry();

        debug!(
            title = %options.title,
            x = geometry.position.x,
            y = geometry.position.y,
            width = geometry.size.width,
            height = geometry.size.height,
            "frame mounted"
        );

        Ok(Self {
            options,
            geometry,
            interaction: Interaction::Idle,
            mode: FrameMode::Normal,
            host,
            listeners,
            callbacks: FrameCallbacks::default(),
        })
    }

    pub fn with_callbacks(mut self, callbacks: FrameCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn options(&self) -> &FrameOptions {
        &self.options
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn position(&self) -> Position {
        self.geometry.position
    }

    pub fn size(&self) -> Size {
        self.geometry.size
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    pub fn is_maximized(&self) -> bool {
        matches!(self.mode, FrameMode::Maximized { .. })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn listeners(&self) -> &L {
        &self.listeners
    }

    /// Host content box, or the viewport when the host is unavailable
    pub fn host_bounds(&self) -> HostBounds {
        self.host.content_bounds().unwrap_or_else(|| {
            debug!("host container unavailable, falling back to viewport");
            self.host.viewport_bounds()
        })
    }

    /// Drag is reachable right now
    pub fn can_drag(&self) -> bool {
        self.options.draggable && !self.is_maximized()
    }

    /// Resize is reachable right now
    pub fn can_resize(&self) -> bool {
        self.options.resizable && !self.is_maximized()
    }

    fn min_size(&self) -> Size {
        Size::new(self.options.min_width, self.options.min_height)
    }

    fn write_geometry(&mut self, next: Geometry) -> bool {
        if next == self.geometry {
            return false;
        }
        self.geometry = next;
        true
    }

    // ------------------------------------------------------------------------
    // Pointer sessions
    // ------------------------------------------------------------------------

    /// Pointer-down on the drag surface. Returns whether a drag started.
    pub fn begin_drag(&mut self, pointer: PointerInput) -> bool {
        if !self.can_drag() {
            trace!(pointer_id = pointer.pointer_id, "drag disabled");
            return false;
        }
        if !self.interaction.is_idle() {
            trace!(pointer_id = pointer.pointer_id, "session already active, ignoring drag");
            return false;
        }

        let offset = Position::new(
            pointer.x - self.geometry.position.x,
            pointer.y - self.geometry.position.y,
        );
        self.interaction = Interaction::Dragging(DragSession {
            pointer_id: pointer.pointer_id,
            offset,
        });
        self.listeners.subscribe();
        debug!(
            pointer_id = pointer.pointer_id,
            offset_x = offset.x,
            offset_y = offset.y,
            "drag started"
        );
        true
    }

    /// Pointer-down on a resize handle. Returns whether a resize started.
    pub fn begin_resize(&mut self, direction: ResizeDirection, pointer: PointerInput) -> bool {
        if !self.can_resize() {
            trace!(pointer_id = pointer.pointer_id, %direction, "resize disabled");
            return false;
        }
        if !self.interaction.is_idle() {
            trace!(pointer_id = pointer.pointer_id, %direction, "session already active, ignoring resize");
            return false;
        }

        self.interaction = Interaction::Resizing(ResizeSession {
            pointer_id: pointer.pointer_id,
            start: pointer.position(),
            start_geometry: self.geometry,
            direction,
        });
        self.listeners.subscribe();
        debug!(pointer_id = pointer.pointer_id, %direction, "resize started");
        true
    }

    /// Global pointer-move. Returns whether geometry changed.
    pub fn pointer_move(&mut self, pointer: PointerInput) -> bool {
        if !self.interaction.owned_by(pointer.pointer_id) {
            trace!(pointer_id = pointer.pointer_id, "move from foreign pointer ignored");
            return false;
        }
        if self.is_maximized() {
            return false;
        }

        let next = match self.interaction {
            Interaction::Idle => return false,
            Interaction::Dragging(session) => self.drag_target(session, pointer),
            Interaction::Resizing(session) => self.resize_target(session, pointer),
        };
        self.write_geometry(next)
    }

    fn drag_target(&self, session: DragSession, pointer: PointerInput) -> Geometry {
        let candidate = Position::new(pointer.x - session.offset.x, pointer.y - session.offset.y);
        Geometry {
            position: clamp_position(candidate, self.geometry.size, self.host_bounds()),
            size: self.geometry.size,
        }
    }

    fn resize_target(&self, session: ResizeSession, pointer: PointerInput) -> Geometry {
        let delta = Position::new(pointer.x - session.start.x, pointer.y - session.start.y);
        let min = self.min_size();
        let resized = resize_geometry(session.start_geometry, session.direction, delta, min);
        clamp_resized(resized, session.direction, self.host_bounds(), min)
    }

    /// Global pointer-up. Returns whether a session ended.
    pub fn pointer_up(&mut self, pointer: PointerInput) -> bool {
        if !self.interaction.owned_by(pointer.pointer_id) {
            trace!(pointer_id = pointer.pointer_id, "release from foreign pointer ignored");
            return false;
        }

        let ended = std::mem::take(&mut self.interaction);
        self.listeners.unsubscribe();
        debug!(
            pointer_id = pointer.pointer_id,
            dragging = ended.is_dragging(),
            "session ended"
        );
        true
    }

    // ------------------------------------------------------------------------
    // Maximize / restore
    // ------------------------------------------------------------------------

    fn maximize_target(&self) -> Geometry {
        maximized_geometry(
            self.host_bounds(),
            self.options.maximize_margin,
            self.options.reserved_bottom,
            self.min_size(),
        )
    }

    /// Toggle: maximize when normal, restore when maximized.
    ///
    /// Maximizing needs `resizable`. Returns whether geometry changed.
    pub fn maximize(&mut self) -> bool {
        if self.is_maximized() {
            return self.restore();
        }
        if !self.options.resizable {
            trace!("maximize disabled");
            return false;
        }

        let restore_to = self.geometry;
        let target = self.maximize_target();
        self.mode = FrameMode::Maximized { restore_to };
        let changed = self.write_geometry(target);
        self.callbacks.maximize();
        debug!(
            width = target.size.width,
            height = target.size.height,
            "frame maximized"
        );
        changed
    }

    /// Put back the geometry saved when maximize began. No-op when normal.
    pub fn restore(&mut self) -> bool {
        match std::mem::take(&mut self.mode) {
            FrameMode::Normal => false,
            FrameMode::Maximized { restore_to } => {
                debug!(
                    x = restore_to.position.x,
                    y = restore_to.position.y,
                    "frame restored"
                );
                self.write_geometry(restore_to)
            }
        }
    }

    /// Host dimensions changed. Refills the host while maximized.
    pub fn host_resized(&mut self) -> bool {
        if !self.is_maximized() {
            return false;
        }
        let target = self.maximize_target();
        self.write_geometry(target)
    }

    /// Double activation of the drag surface
    pub fn double_activate(&mut self) -> bool {
        if !self.options.resizable {
            return false;
        }
        self.maximize()
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    pub fn close(&mut self) {
        debug!(title = %self.options.title, "close requested");
        self.callbacks.close();
    }

    pub fn minimize(&mut self) {
        debug!(title = %self.options.title, "minimize requested");
        self.callbacks.minimize();
    }

    /// Drop any session and release the global listeners unconditionally.
    pub fn unmount(&mut self) {
        self.interaction = Interaction::Idle;
        self.listeners.unsubscribe();
    }
}

impl<H: HostSurface, L: PointerListeners> Drop for FrameController<H, L> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<H: HostSurface, L: PointerListeners> std::fmt::Debug for FrameController<H, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameController")
            .field("title", &self.options.title)
            .field("geometry", &self.geometry)
            .field("interaction", &self.interaction)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{NoListeners, StaticHost};

    fn controller(options: FrameOptions) -> FrameController<StaticHost, NoListeners> {
        FrameController::new(options, StaticHost::new(1024.0, 768.0), NoListeners).unwrap()
    }

    fn options_at(x: f64, y: f64, width: f64, height: f64) -> FrameOptions {
        FrameOptions {
            initial_position: Position::new(x, y),
            initial_size: Size::new(width, height),
            ..FrameOptions::new("Test")
        }
    }

    #[test]
    fn test_initial_size_raised_to_minimum() {
        let frame = controller(options_at(10.0, 10.0, 100.0, 50.0));
        assert_eq!(frame.size(), Size::new(280.0, 200.0));
        assert_eq!(frame.position(), Position::new(10.0, 10.0));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let result = FrameController::new(
            options_at(f64::INFINITY, 0.0, 400.0, 300.0),
            StaticHost::new(1024.0, 768.0),
            NoListeners,
        );
        assert!(matches!(result, Err(FrameError::InvalidOption(_))));
    }

    #[test]
    fn test_drag_clamps_to_origin() {
        let mut frame = controller(options_at(100.0, 100.0, 400.0, 300.0));
        assert!(frame.begin_drag(PointerInput::new(1, 150.0, 150.0)));
        assert!(frame.pointer_move(PointerInput::new(1, 5.0, 5.0)));
        assert_eq!(frame.position(), Position::ORIGIN);
        assert_eq!(frame.size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn test_no_op_move_reports_unchanged() {
        let mut frame = controller(options_at(100.0, 100.0, 400.0, 300.0));
        frame.begin_drag(PointerInput::new(1, 150.0, 150.0));
        assert!(!frame.pointer_move(PointerInput::new(1, 150.0, 150.0)));
        assert!(frame.pointer_move(PointerInput::new(1, 160.0, 150.0)));
        assert!(!frame.pointer_move(PointerInput::new(1, 160.0, 150.0)));
    }

    #[test]
    fn test_disabled_flags_block_sessions() {
        let mut frame = controller(FrameOptions {
            draggable: false,
            resizable: false,
            ..options_at(100.0, 100.0, 400.0, 300.0)
        });
        assert!(!frame.begin_drag(PointerInput::new(1, 150.0, 150.0)));
        assert!(!frame.begin_resize(ResizeDirection::SE, PointerInput::new(1, 500.0, 400.0)));
        assert!(!frame.maximize());
        assert!(!frame.double_activate());
        assert!(frame.interaction().is_idle());
        assert!(!frame.is_maximized());
    }

    #[test]
    fn test_maximize_blocks_sessions_until_restore() {
        let mut frame = controller(options_at(100.0, 100.0, 400.0, 300.0));
        assert!(frame.maximize());
        assert!(!frame.begin_drag(PointerInput::new(1, 150.0, 150.0)));
        assert!(!frame.begin_resize(ResizeDirection::E, PointerInput::new(1, 150.0, 150.0)));

        assert!(frame.maximize());
        assert!(frame.begin_drag(PointerInput::new(1, 150.0, 150.0)));
    }

    #[test]
    fn test_restore_when_normal_is_noop() {
        let mut frame = controller(options_at(100.0, 100.0, 400.0, 300.0));
        assert!(!frame.restore());
        assert_eq!(frame.mode(), FrameMode::Normal);
        assert_eq!(frame.geometry(), Geometry::new(100.0, 100.0, 400.0, 300.0));
    }

    #[test]
    fn test_host_resize_ignored_when_normal() {
        let mut frame = controller(options_at(100.0, 100.0, 400.0, 300.0));
        assert!(!frame.host_resized());
    }

    #[test]
    fn test_detached_host_falls_back_to_viewport() {
        let frame = FrameController::new(
            options_at(100.0, 100.0, 400.0, 300.0),
            StaticHost::detached(HostBounds::new(800.0, 600.0)),
            NoListeners,
        )
        .unwrap();
        assert_eq!(frame.host_bounds(), HostBounds::new(800.0, 600.0));
    }
}

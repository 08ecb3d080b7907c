//! Interaction state for pointer-driven move and resize

use frame_types::{Geometry, Position, ResizeDirection};

/// Live drag, tied to one pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: i32,
    /// Pointer position minus frame position at drag start
    pub offset: Position,
}

/// Live resize, tied to one pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSession {
    pub pointer_id: i32,
    /// Pointer position at resize start
    pub start: Position,
    /// Frame geometry at resize start
    pub start_geometry: Geometry,
    pub direction: ResizeDirection,
}

/// Current interaction. Dragging and resizing at once cannot be expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl Interaction {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging(_))
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Interaction::Resizing(_))
    }

    /// Pointer that owns the session, if any
    pub fn pointer_id(&self) -> Option<i32> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging(session) => Some(session.pointer_id),
            Interaction::Resizing(session) => Some(session.pointer_id),
        }
    }

    /// Whether an event from `pointer_id` belongs to the active session
    pub fn owned_by(&self, pointer_id: i32) -> bool {
        self.pointer_id() == Some(pointer_id)
    }
}

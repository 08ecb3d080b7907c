//! Imperative handle given to whoever mounts a frame

use std::fmt;
use std::rc::Rc;

/// Something that can take input focus, usually the frame's root element
pub trait FocusTarget {
    /// Returns false when there is nothing to focus yet.
    fn focus(&self) -> bool;
}

/// Capability returned to the caller when a frame is constructed.
///
/// Lets a window manager bring the frame forward without knowing how it is
/// rendered.
#[derive(Clone)]
pub struct FrameHandle {
    target: Rc<dyn FocusTarget>,
}

impl FrameHandle {
    pub fn new(target: impl FocusTarget + 'static) -> Self {
        Self {
            target: Rc::new(target),
        }
    }

    pub fn focus(&self) -> bool {
        let focused = self.target.focus();
        if !focused {
            tracing::debug!("focus requested before the frame was mounted");
        }
        focused
    }
}

impl fmt::Debug for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameHandle").finish_non_exhaustive()
    }
}

impl PartialEq for FrameHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.target, &other.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingTarget {
        mounted: bool,
        hits: Rc<Cell<u32>>,
    }

    impl FocusTarget for CountingTarget {
        fn focus(&self) -> bool {
            if self.mounted {
                self.hits.set(self.hits.get() + 1);
            }
            self.mounted
        }
    }

    #[test]
    fn test_focus_delegates_to_target() {
        let hits = Rc::new(Cell::new(0));
        let handle = FrameHandle::new(CountingTarget {
            mounted: true,
            hits: hits.clone(),
        });
        let copy = handle.clone();

        assert!(handle.focus());
        assert!(copy.focus());
        assert_eq!(hits.get(), 2);
        assert_eq!(handle, copy);
    }

    #[test]
    fn test_focus_before_mount_reports_false() {
        let handle = FrameHandle::new(CountingTarget {
            mounted: false,
            hits: Rc::new(Cell::new(0)),
        });
        assert!(!handle.focus());
    }
}

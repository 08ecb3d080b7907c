pub mod floating_window;
pub mod frame;
pub mod interop;

pub use floating_window::*;
pub use frame::{DomFrame, FrameView, MountedFrame};
pub use interop::*;

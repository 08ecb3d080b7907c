//! Headless controller for floating window frames.
//!
//! Gives a panel desktop-like behavior inside a host surface: drag to move,
//! edge and corner resize, maximize and restore. Rendering, event plumbing
//! and host measurement are supplied by the embedder through [`HostSurface`],
//! [`PointerListeners`] and [`FocusTarget`].

pub mod callbacks;
pub mod clamp;
pub mod config;
pub mod controller;
pub mod error;
pub mod handle;
pub mod host;
pub mod interaction;
pub mod resize;

pub use callbacks::FrameCallbacks;
pub use clamp::{clamp_position, clamp_resized, maximized_geometry};
pub use config::{load_options, validate_options};
pub use controller::{FrameController, FrameMode};
pub use error::FrameError;
pub use handle::{FocusTarget, FrameHandle};
pub use host::{HostSurface, NoListeners, PointerListeners, StaticHost};
pub use interaction::{DragSession, Interaction, ResizeSession};
pub use resize::resize_geometry;

pub use frame_types::{
    FrameOptions, Geometry, HostBounds, PointerInput, Position, ResizeDirection, Size,
};

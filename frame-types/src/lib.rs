//! Shared types between the frame controller and the UI
//!
//! These types are used by both:
//! - the headless frame controller (native Rust, unit-tested)
//! - Dioxus components (WASM)
//!
//! Serializable with serde so window presets can live in JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_POSITION_X: f64 = 50.0;
pub const DEFAULT_POSITION_Y: f64 = 50.0;
pub const DEFAULT_WIDTH: f64 = 400.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;
pub const DEFAULT_MIN_WIDTH: f64 = 280.0;
pub const DEFAULT_MIN_HEIGHT: f64 = 200.0;

/// Gap kept between a maximized frame and every edge of its host
pub const MAXIMIZE_MARGIN: f64 = 8.0;

/// Strip at the bottom of the host left free for the taskbar
pub const TASKBAR_RESERVED_HEIGHT: f64 = 36.0;

// ============================================================================
// Geometry
// ============================================================================

/// Top-left offset of a frame within its host surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Frame dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Raise each dimension to at least the given floor
    pub fn at_least(self, min_width: f64, min_height: f64) -> Self {
        Self::new(self.width.max(min_width), self.height.max(min_height))
    }
}

/// Position and size together, the unit the controller writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub position: Position,
    pub size: Size,
}

impl Geometry {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }
}

/// Content box of the surface hosting a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HostBounds {
    pub width: f64,
    pub height: f64,
}

impl HostBounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Largest x a frame of `size` may take while staying inside
    pub fn max_x(&self, size: Size) -> f64 {
        (self.width - size.width).max(0.0)
    }

    /// Largest y a frame of `size` may take while staying inside
    pub fn max_y(&self, size: Size) -> f64 {
        (self.height - size.height).max(0.0)
    }
}

// ============================================================================
// Input
// ============================================================================

/// Pointer sample in client coordinates. Only differences between samples
/// matter, so any fixed origin works.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub pointer_id: i32,
    pub x: f64,
    pub y: f64,
}

impl PointerInput {
    pub const fn new(pointer_id: i32, x: f64, y: f64) -> Self {
        Self { pointer_id, x, y }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Compass direction of a resize handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::NE,
        ResizeDirection::NW,
        ResizeDirection::SE,
        ResizeDirection::SW,
    ];

    pub fn has_north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    pub fn has_south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    pub fn has_east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    pub fn has_west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    pub fn is_corner(self) -> bool {
        matches!(self, Self::NE | Self::NW | Self::SE | Self::SW)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }

    /// CSS cursor shown over the handle
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::NE | Self::SW => "nesw-resize",
            Self::NW | Self::SE => "nwse-resize",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for ResizeDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeDirection::ALL
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Caller-supplied configuration for one frame
///
/// Every field is optional in serialized form; missing fields take the
/// defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameOptions {
    pub title: String,
    pub status_text: Option<String>,
    /// Enables drag transitions
    pub draggable: bool,
    /// Enables resize transitions and the maximize toggle
    pub resizable: bool,
    pub initial_position: Position,
    pub initial_size: Size,
    /// Floor for resize math
    pub min_width: f64,
    /// Floor for resize math
    pub min_height: f64,
    pub maximize_margin: f64,
    pub reserved_bottom: f64,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            status_text: None,
            draggable: true,
            resizable: true,
            initial_position: Position::new(DEFAULT_POSITION_X, DEFAULT_POSITION_Y),
            initial_size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            maximize_margin: MAXIMIZE_MARGIN,
            reserved_bottom: TASKBAR_RESERVED_HEIGHT,
        }
    }
}

impl FrameOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Geometry a frame starts with: the initial position as given, the
    /// initial size raised to the minimum.
    pub fn mount_geometry(&self) -> Geometry {
        Geometry {
            position: self.initial_position,
            size: self.initial_size.at_least(self.min_width, self.min_height),
        }
    }
}

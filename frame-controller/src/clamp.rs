//! Viewport clamping
//!
//! Every candidate geometry passes through here before it is written, so
//! out-of-range values are corrected to the nearest legal value instead of
//! being rejected.

use frame_types::{Geometry, HostBounds, Position, ResizeDirection, Size};

/// Keep a frame of `size` inside the host.
///
/// x lands in `[0, max(0, host.width - size.width)]`, likewise y. A frame
/// larger than its host is pinned to 0 on that axis.
pub fn clamp_position(candidate: Position, size: Size, host: HostBounds) -> Position {
    Position::new(
        candidate.x.clamp(0.0, host.max_x(size)),
        candidate.y.clamp(0.0, host.max_y(size)),
    )
}

/// Fit a resized geometry into the host.
///
/// Edges moved by `direction` are pulled back to the host boundary: a west
/// or north edge past 0 is cut at 0 with the opposite edge kept in place,
/// and an east or south edge past the host is cut at the host edge. Sizes
/// never drop below `min`, and the position is clamped last.
pub fn clamp_resized(
    geometry: Geometry,
    direction: ResizeDirection,
    host: HostBounds,
    min: Size,
) -> Geometry {
    let mut out = geometry;

    if direction.has_west() && out.position.x < 0.0 {
        let right = out.right();
        out.position.x = 0.0;
        out.size.width = right.max(min.width);
    }
    if direction.has_east() {
        out.size.width = out
            .size
            .width
            .min(host.width - out.position.x)
            .max(min.width);
    }
    if direction.has_north() && out.position.y < 0.0 {
        let bottom = out.bottom();
        out.position.y = 0.0;
        out.size.height = bottom.max(min.height);
    }
    if direction.has_south() {
        out.size.height = out
            .size
            .height
            .min(host.height - out.position.y)
            .max(min.height);
    }

    out.position = clamp_position(out.position, out.size, host);
    out
}

/// Geometry that fills the host minus a margin on every side and a
/// reserved strip along the bottom.
pub fn maximized_geometry(
    host: HostBounds,
    margin: f64,
    reserved_bottom: f64,
    min: Size,
) -> Geometry {
    let size = Size::new(
        host.width - 2.0 * margin,
        host.height - 2.0 * margin - reserved_bottom,
    )
    .at_least(min.width, min.height);

    Geometry {
        position: clamp_position(Position::new(margin, margin), size, host),
        size,
    }
}

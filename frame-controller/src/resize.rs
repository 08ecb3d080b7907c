//! Resize math for the eight compass handles

use frame_types::{Geometry, Position, ResizeDirection, Size};

/// Apply a pointer delta to the geometry captured at resize start.
///
/// Each compass component present in `direction` grows or shrinks its
/// dimension from the starting size, never below `min`. For north and west
/// components the position follows by however much the dimension actually
/// changed, so the opposite edge stays where it was even when the floor is
/// hit. The result is not yet clamped to the host.
pub fn resize_geometry(
    start: Geometry,
    direction: ResizeDirection,
    delta: Position,
    min: Size,
) -> Geometry {
    let mut next = start;

    if direction.has_east() {
        next.size.width = (start.size.width + delta.x).max(min.width);
    }
    if direction.has_west() {
        next.size.width = (start.size.width - delta.x).max(min.width);
        next.position.x = start.right() - next.size.width;
    }
    if direction.has_south() {
        next.size.height = (start.size.height + delta.y).max(min.height);
    }
    if direction.has_north() {
        next.size.height = (start.size.height - delta.y).max(min.height);
        next.position.y = start.bottom() - next.size.height;
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(280.0, 200.0);

    #[test]
    fn test_resize_south() {
        let next = resize_geometry(
            Geometry::new(100.0, 100.0, 400.0, 300.0),
            ResizeDirection::S,
            Position::new(30.0, 50.0),
            MIN,
        );
        assert_eq!(next, Geometry::new(100.0, 100.0, 400.0, 350.0));
    }

    #[test]
    fn test_resize_north_moves_top_edge() {
        let next = resize_geometry(
            Geometry::new(100.0, 100.0, 400.0, 300.0),
            ResizeDirection::N,
            Position::new(0.0, -50.0),
            MIN,
        );
        assert_eq!(next, Geometry::new(100.0, 50.0, 400.0, 350.0));
    }

    #[test]
    fn test_resize_nw_hits_width_floor() {
        // 50px requested, only 20px available before the 280px floor
        let next = resize_geometry(
            Geometry::new(0.0, 0.0, 300.0, 300.0),
            ResizeDirection::NW,
            Position::new(50.0, 50.0),
            MIN,
        );
        assert_eq!(next.position.x, 20.0);
        assert_eq!(next.size.width, 280.0);
        assert_eq!(next.position.y, 50.0);
        assert_eq!(next.size.height, 250.0);
    }

    #[test]
    fn test_resize_floor_for_every_direction() {
        let start = Geometry::new(200.0, 200.0, 300.0, 250.0);
        for direction in ResizeDirection::ALL {
            for delta in [-900.0, -10.0, 0.0, 10.0, 900.0] {
                let next = resize_geometry(start, direction, Position::new(delta, delta), MIN);
                assert!(next.size.width >= MIN.width, "{direction} {delta}");
                assert!(next.size.height >= MIN.height, "{direction} {delta}");
            }
        }
    }

    #[test]
    fn test_opposite_edges_stay_fixed() {
        let start = Geometry::new(200.0, 200.0, 300.0, 250.0);
        for delta in [-120.0, 15.0, 75.0, 400.0] {
            let west = resize_geometry(start, ResizeDirection::W, Position::new(delta, 0.0), MIN);
            assert!((west.right() - start.right()).abs() < 1e-9);

            let north = resize_geometry(start, ResizeDirection::N, Position::new(0.0, delta), MIN);
            assert!((north.bottom() - start.bottom()).abs() < 1e-9);

            let east = resize_geometry(start, ResizeDirection::E, Position::new(delta, 0.0), MIN);
            assert_eq!(east.position, start.position);
        }
    }

    #[test]
    fn test_unused_axis_is_untouched() {
        let start = Geometry::new(10.0, 10.0, 400.0, 300.0);
        let next = resize_geometry(start, ResizeDirection::E, Position::new(40.0, 999.0), MIN);
        assert_eq!(next.size.height, 300.0);
        assert_eq!(next.position, start.position);
    }
}

//! Axis-aligned rectangles and the square constraint.
//!
//! Equal steps in longitude and latitude are not equal ground distances away
//! from the equator, so squaring happens on geodesic lengths and the corner
//! is rebuilt by offsetting the anchor along the cardinal directions.

use geodraw_core::DistanceUnit;

use super::circle::open_vertices;
use super::measure::{destination, distance, distance_m, ring_area_m2};
use crate::model::{BoundingBox, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleDimensions {
    pub width: f64,
    pub height: f64,
    /// In the square of `unit`.
    pub area: f64,
    pub unit: DistanceUnit,
}

/// Project `free` so that the rectangle spanned with `anchor` is a square on
/// the ground.
///
/// The side is the larger of the horizontal and vertical geodesic extents;
/// the corner stays in the quadrant `free` was in.
///
/// The east-west offset is measured along the anchor's parallel, so the
/// opposite side runs along a parallel of a different length. Its relative
/// error is roughly `side * tan(lat) / R`: under 1% for sides below about
/// 64 km at 45° and 37 km at 60°, growing toward the poles.
pub fn square_corner(anchor: Position, free: Position) -> Position {
    let horizontal = distance_m(anchor, Position::new(free.lon, anchor.lat));
    let vertical = distance_m(anchor, Position::new(anchor.lon, free.lat));
    let side = horizontal.max(vertical);

    let north_south = if free.lat >= anchor.lat { 0.0 } else { 180.0 };
    let east_west = if free.lon >= anchor.lon { 90.0 } else { 270.0 };

    Position::new(
        destination(anchor, side, east_west).lon,
        destination(anchor, side, north_south).lat,
    )
}

/// Closed ring `anchor, adjacent1, corner, adjacent2, anchor` where
/// `adjacent1` shares the anchor's longitude and `adjacent2` its latitude.
pub fn rectangle_ring(anchor: Position, corner: Position) -> Vec<Position> {
    vec![
        anchor,
        Position::new(anchor.lon, corner.lat),
        corner,
        Position::new(corner.lon, anchor.lat),
        anchor,
    ]
}

/// Move corner `index` of a closed rectangle ring to `target`, dragging the
/// two neighbouring corners along so the ring stays axis-aligned. The
/// opposite corner does not move.
///
/// Returns `None` unless the ring has exactly four corners.
pub fn resize_corner(ring: &[Position], index: usize, target: Position) -> Option<Vec<Position>> {
    let mut corners = open_vertices(ring);
    if corners.len() != 4 || index >= 4 {
        return None;
    }
    let dragged = corners[index];
    for neighbour in [(index + 1) % 4, (index + 3) % 4] {
        let n = corners[neighbour];
        if (n.lon - dragged.lon).abs() <= (n.lat - dragged.lat).abs() {
            corners[neighbour].lon = target.lon;
        } else {
            corners[neighbour].lat = target.lat;
        }
    }
    corners[index] = target;
    corners.push(corners[0]);
    Some(corners)
}

/// Width, height and area of the ring's bounding box, measured on the ground.
pub fn rectangle_dimensions(ring: &[Position], unit: DistanceUnit) -> Option<RectangleDimensions> {
    if open_vertices(ring).len() < 3 {
        return None;
    }
    let bbox = BoundingBox::from_positions(ring)?;
    let [sw, nw, _, se] = bbox.corners();
    Some(RectangleDimensions {
        width: distance(sw, se, unit),
        height: distance(sw, nw, unit),
        area: unit.area_from_square_meters(ring_area_m2(&bbox.ring())),
        unit,
    })
}

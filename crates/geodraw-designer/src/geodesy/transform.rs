use geodraw_core::constants::{MAX_LATITUDE, MIN_LATITUDE};

use super::measure::{bearing, destination, distance_m};
use crate::model::{Geometry, Position};

/// Move every coordinate by the ground offset between `from` and `to`.
pub fn translate_geometry(geometry: &Geometry, from: Position, to: Position) -> Geometry {
    let offset = distance_m(from, to);
    if offset == 0.0 {
        return geometry.clone();
    }
    let heading = bearing(from, to);
    geometry.map_positions(|p| destination(p, offset, heading))
}

/// Scale coordinates about `origin` by independent longitude and latitude factors.
pub fn scale_geometry(geometry: &Geometry, origin: Position, scale_lon: f64, scale_lat: f64) -> Geometry {
    geometry.map_positions(|p| {
        Position::new(
            origin.lon + (p.lon - origin.lon) * scale_lon,
            (origin.lat + (p.lat - origin.lat) * scale_lat).clamp(MIN_LATITUDE, MAX_LATITUDE),
        )
    })
}

//! Great-circle distance, bearing and spherical area.

use geodraw_core::constants::{EARTH_EQUATORIAL_RADIUS_M, EARTH_RADIUS_M};
use geodraw_core::DistanceUnit;

use crate::model::Position;

/// Haversine distance in meters.
pub fn distance_m(a: Position, b: Position) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Great-circle distance expressed in `unit`.
pub fn distance(a: Position, b: Position, unit: DistanceUnit) -> f64 {
    unit.from_meters(distance_m(a, b))
}

/// Initial bearing from `a` to `b` in degrees, within `[-180, 180]`.
pub fn bearing(a: Position, b: Position) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    y.atan2(x).to_degrees()
}

/// Point reached by travelling `distance_m` meters from `origin` along
/// `bearing_deg`. Longitude is wrapped into `[-180, 180]`.
pub fn destination(origin: Position, distance_m: f64, bearing_deg: f64) -> Position {
    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Position::new(wrap_longitude(lon2.to_degrees()), lat2.to_degrees())
}

fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Point halfway along the great circle between `a` and `b`.
pub fn midpoint(a: Position, b: Position) -> Position {
    destination(a, distance_m(a, b) / 2.0, bearing(a, b))
}

/// Sum of consecutive segment distances.
pub fn line_length(positions: &[Position], unit: DistanceUnit) -> f64 {
    let meters: f64 = positions.windows(2).map(|w| distance_m(w[0], w[1])).sum();
    unit.from_meters(meters)
}

/// Unsigned spherical area of a closed ring in square meters.
pub fn ring_area_m2(ring: &[Position]) -> f64 {
    let n = ring.len();
    if n <= 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..n {
        let (lower, middle, upper) = if i == n - 2 {
            (n - 2, n - 1, 0)
        } else if i == n - 1 {
            (n - 1, 0, 1)
        } else {
            (i, i + 1, i + 2)
        };
        let p1 = ring[lower];
        let p2 = ring[middle];
        let p3 = ring[upper];
        total += (p3.lon.to_radians() - p1.lon.to_radians()) * p2.lat.to_radians().sin();
    }

    (total * EARTH_EQUATORIAL_RADIUS_M * EARTH_EQUATORIAL_RADIUS_M / 2.0).abs()
}

/// Polygon area (outer ring minus holes) in the square of `unit`.
pub fn polygon_area(rings: &[Vec<Position>], unit: DistanceUnit) -> f64 {
    let mut rings = rings.iter();
    let Some(outer) = rings.next() else {
        return 0.0;
    };
    let holes: f64 = rings.map(|r| ring_area_m2(r)).sum();
    unit.area_from_square_meters((ring_area_m2(outer) - holes).max(0.0))
}

/// Total length of every ring of a polygon.
pub fn perimeter(rings: &[Vec<Position>], unit: DistanceUnit) -> f64 {
    rings.iter().map(|r| line_length(r, unit)).sum()
}

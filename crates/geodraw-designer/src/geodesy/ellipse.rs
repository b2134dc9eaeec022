//! Ellipse parameters from click sequences and polygon approximations.

use std::f64::consts::PI;

use geodraw_core::DistanceUnit;

use super::circle::{centroid, open_vertices};
use super::measure::{bearing, destination, distance_m, midpoint};
use crate::model::Position;

/// Ellipse description with lengths expressed in `unit` and area in its square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseParams {
    pub center: Position,
    pub semi_major: f64,
    pub semi_minor: f64,
    /// Bearing of the major axis in degrees, within `[0, 180)`.
    pub angle: f64,
    pub area: f64,
    pub unit: DistanceUnit,
}

impl EllipseParams {
    fn new(center: Position, semi_major_m: f64, semi_minor_m: f64, angle: f64, unit: DistanceUnit) -> Self {
        let semi_major = unit.from_meters(semi_major_m);
        let semi_minor = unit.from_meters(semi_minor_m);
        Self {
            center,
            semi_major,
            semi_minor,
            angle: axis_angle(angle),
            area: PI * semi_major * semi_minor,
            unit,
        }
    }

    pub fn semi_major_m(&self) -> f64 {
        self.unit.to_meters(self.semi_major)
    }

    pub fn semi_minor_m(&self) -> f64 {
        self.unit.to_meters(self.semi_minor)
    }
}

/// Axes are undirected, so fold bearings into `[0, 180)`.
fn axis_angle(bearing_deg: f64) -> f64 {
    bearing_deg.rem_euclid(180.0)
}

/// Ellipse from the three clicks of the draw interaction.
///
/// Clicks 1 and 2 are the ends of the major axis; the distance from their
/// midpoint to click 3 is the semi-minor axis. Returns `None` when the
/// major axis has no length.
pub fn ellipse_from_clicks(
    first: Position,
    second: Position,
    third: Position,
    unit: DistanceUnit,
) -> Option<EllipseParams> {
    let major_m = distance_m(first, second);
    if !major_m.is_finite() || major_m <= 0.0 {
        return None;
    }
    let center = midpoint(first, second);
    let semi_minor_m = distance_m(center, third);
    if !semi_minor_m.is_finite() {
        return None;
    }
    Some(EllipseParams::new(
        center,
        major_m / 2.0,
        semi_minor_m,
        bearing(center, second),
        unit,
    ))
}

/// Closed ring of `steps` vertices tracing an ellipse.
///
/// Vertex `i` and vertex `i + steps / 2` lie on opposite ends of a diameter
/// when `steps` is even.
pub fn ellipse_polygon(
    center: Position,
    semi_major_m: f64,
    semi_minor_m: f64,
    angle_deg: f64,
    steps: usize,
) -> Vec<Position> {
    let steps = steps.max(4);
    let mut ring: Vec<Position> = (0..steps)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / steps as f64;
            let along = semi_major_m * theta.cos();
            let across = semi_minor_m * theta.sin();
            let offset_bearing = angle_deg + across.atan2(along).to_degrees();
            destination(center, along.hypot(across), offset_bearing)
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// Recover ellipse axes from a polygon approximation.
///
/// Compares each vertex with its antipodal vertex (index offset by half the
/// vertex count); the longest span is the major axis, the shortest the minor.
pub fn ellipse_axes(ring: &[Position], unit: DistanceUnit) -> Option<EllipseParams> {
    let vertices = open_vertices(ring);
    if vertices.len() < 4 {
        return None;
    }
    let half = vertices.len() / 2;
    let center = centroid(&vertices)?;

    let mut major = (0.0_f64, 0_usize);
    let mut minor = f64::INFINITY;
    for i in 0..half {
        let span = distance_m(vertices[i], vertices[i + half]);
        if span > major.0 {
            major = (span, i);
        }
        minor = minor.min(span);
    }
    if major.0 <= 0.0 || !minor.is_finite() {
        return None;
    }

    Some(EllipseParams::new(
        center,
        major.0 / 2.0,
        minor / 2.0,
        bearing(center, vertices[major.1]),
        unit,
    ))
}

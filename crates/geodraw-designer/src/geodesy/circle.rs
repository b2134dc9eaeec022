//! Circle parameters and adaptive tessellation.

use geodraw_core::DistanceUnit;
use geodraw_settings::TessellationSettings;

use super::measure::{destination, distance_m};
use crate::model::Position;

/// Which radius formula to use when recovering a circle from its polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusMode {
    /// Distance from the center to the first vertex. Used on every drag tick.
    Fast,
    /// Mean distance from the center to all vertices. Used when a shape is
    /// created or its geometry is updated.
    Precise,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleParams {
    pub center: Position,
    /// Radius expressed in `unit`.
    pub radius: f64,
    pub unit: DistanceUnit,
}

impl CircleParams {
    pub fn radius_m(&self) -> f64 {
        self.unit.to_meters(self.radius)
    }
}

/// Vertices of a ring with the closing coordinate and consecutive duplicates removed.
pub(crate) fn open_vertices(ring: &[Position]) -> Vec<Position> {
    let mut vertices: Vec<Position> = Vec::with_capacity(ring.len());
    for p in ring {
        if vertices.last().is_some_and(|last| last.approx_eq(p)) {
            continue;
        }
        vertices.push(*p);
    }
    if vertices.len() > 1 && vertices[0].approx_eq(&vertices[vertices.len() - 1]) {
        vertices.pop();
    }
    vertices
}

/// Mean of the ring vertices, ignoring the closing coordinate.
pub fn centroid(ring: &[Position]) -> Option<Position> {
    let vertices = open_vertices(ring);
    if vertices.is_empty() {
        return None;
    }
    let n = vertices.len() as f64;
    let (lon, lat) = vertices
        .iter()
        .fold((0.0, 0.0), |(lon, lat), p| (lon + p.lon, lat + p.lat));
    Some(Position::new(lon / n, lat / n))
}

/// Recover center and radius from a polygon approximating a circle.
///
/// Returns `None` when the ring has fewer than 3 distinct vertices.
pub fn circle_params(ring: &[Position], mode: RadiusMode, unit: DistanceUnit) -> Option<CircleParams> {
    let vertices = open_vertices(ring);
    if vertices.len() < 3 {
        return None;
    }
    let center = centroid(&vertices)?;

    let radius_m = match mode {
        RadiusMode::Fast => distance_m(center, vertices[0]),
        RadiusMode::Precise => {
            vertices.iter().map(|v| distance_m(center, *v)).sum::<f64>() / vertices.len() as f64
        }
    };
    if !radius_m.is_finite() {
        return None;
    }

    Some(CircleParams {
        center,
        radius: unit.from_meters(radius_m),
        unit,
    })
}

/// Number of vertices used to approximate a circle of `radius_km`.
///
/// Interpolates logarithmically between the configured step bounds and
/// clamps outside the configured radius range.
pub fn adaptive_steps(radius_km: f64, settings: &TessellationSettings) -> usize {
    let min_steps = settings.min_steps;
    let max_steps = settings.max_steps.max(min_steps);

    if radius_km.is_nan() || radius_km <= settings.min_radius_km {
        return min_steps;
    }
    if radius_km >= settings.max_radius_km {
        return max_steps;
    }

    let t = (radius_km.ln() - settings.min_radius_km.ln())
        / (settings.max_radius_km.ln() - settings.min_radius_km.ln());
    let steps = min_steps as f64 + t * (max_steps - min_steps) as f64;
    (steps.round() as usize).clamp(min_steps, max_steps)
}

/// Closed ring of `steps` vertices around `center`.
pub fn circle_polygon(center: Position, radius_m: f64, steps: usize) -> Vec<Position> {
    let steps = steps.max(3);
    let mut ring: Vec<Position> = (0..steps)
        .map(|i| destination(center, radius_m, -(i as f64) * 360.0 / steps as f64))
        .collect();
    ring.push(ring[0]);
    ring
}

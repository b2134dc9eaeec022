//! Shape validation.
//!
//! Validation never fails: every check reports through a [`ValidationResult`]
//! whose `errors` block persistence and whose `warnings` are advisory.

use serde::{Deserialize, Serialize};

use geodraw_core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

use crate::model::{Feature, Geometry, Position, Shape, ShapeType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn from_parts(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Validate a persisted shape.
pub fn validate_shape(shape: &Shape) -> ValidationResult {
    validate_geometry(&shape.geometry, shape.shape_type)
}

/// Validate a drawn feature using its shape flag.
pub fn validate_feature(feature: &Feature) -> ValidationResult {
    validate_geometry(&feature.geometry, feature.shape_type())
}

/// Validate a geometry, dispatching on its kind.
///
/// Circles skip the self-intersection check.
pub fn validate_geometry(geometry: &Geometry, shape_type: ShapeType) -> ValidationResult {
    match geometry {
        Geometry::Point(p) => validate_point(*p),
        Geometry::LineString(line) => validate_line_string(line),
        Geometry::Polygon(rings) => validate_polygon(rings, shape_type != ShapeType::Circle),
    }
}

fn coordinate_errors(p: Position) -> Vec<String> {
    if !p.is_finite() {
        return vec![format!(
            "Coordinate [{}, {}] is not a finite number",
            p.lon, p.lat
        )];
    }
    let mut errors = Vec::new();
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&p.lon) {
        errors.push(format!(
            "Longitude {} is out of range [{}, {}]",
            p.lon, MIN_LONGITUDE, MAX_LONGITUDE
        ));
    }
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&p.lat) {
        errors.push(format!(
            "Latitude {} is out of range [{}, {}]",
            p.lat, MIN_LATITUDE, MAX_LATITUDE
        ));
    }
    errors
}

pub fn validate_point(p: Position) -> ValidationResult {
    ValidationResult::from_parts(coordinate_errors(p), Vec::new())
}

pub fn validate_line_string(line: &[Position]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if line.len() < 2 {
        errors.push(format!(
            "LineString must have at least 2 points, found {}",
            line.len()
        ));
    }
    for (i, p) in line.iter().enumerate() {
        errors.extend(coordinate_errors(*p).into_iter().map(|e| format!("Point {}: {}", i, e)));
    }
    for (i, pair) in line.windows(2).enumerate() {
        if pair[0] == pair[1] {
            warnings.push(format!("Duplicate consecutive points at index {}", i + 1));
        }
    }

    ValidationResult::from_parts(errors, warnings)
}

pub fn validate_polygon(rings: &[Vec<Position>], check_self_intersection: bool) -> ValidationResult {
    let mut errors = Vec::new();

    if rings.is_empty() {
        errors.push("Polygon must have an outer ring".to_string());
    }
    for (r, ring) in rings.iter().enumerate() {
        if ring.len() < 4 {
            errors.push(format!(
                "Ring {} must have at least 4 points, found {}",
                r,
                ring.len()
            ));
        }
        if ring.first() != ring.last() {
            errors.push(format!("Ring {} is not closed", r));
        }
        for (i, p) in ring.iter().enumerate() {
            errors.extend(
                coordinate_errors(*p)
                    .into_iter()
                    .map(|e| format!("Ring {} point {}: {}", r, i, e)),
            );
        }
    }

    if check_self_intersection {
        if let Some(outer) = rings.first() {
            if outer.len() >= 4 && ring_self_intersects(outer) {
                errors.push("Polygon outer ring must not self-intersect".to_string());
            }
        }
    }

    ValidationResult::from_parts(errors, Vec::new())
}

/// Sign of the cross product of `ab` and `ac`.
fn orientation(a: Position, b: Position, c: Position) -> f64 {
    (b.lon - a.lon) * (c.lat - a.lat) - (b.lat - a.lat) * (c.lon - a.lon)
}

fn segments_cross(a: Position, b: Position, c: Position, d: Position) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    o1 * o2 < 0.0 && o3 * o4 < 0.0
}

/// Whether any two non-adjacent edges of a closed ring properly intersect.
///
/// Touching and collinear overlaps are not counted.
pub fn ring_self_intersects(ring: &[Position]) -> bool {
    if ring.len() < 4 {
        return false;
    }
    let edges = ring.len() - 1;
    for i in 0..edges {
        for j in (i + 2)..edges {
            if i == 0 && j == edges - 1 {
                continue;
            }
            if segments_cross(ring[i], ring[i + 1], ring[j], ring[j + 1]) {
                return true;
            }
        }
    }
    false
}

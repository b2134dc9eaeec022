//! Conversion between drawn features and persisted shapes.
//!
//! A freshly drawn geometry becomes a temporary [`Shape`] with no
//! `last_updated`; [`commit`] is the only step that stamps it. Geometry
//! updates and clones never count as a save.

use chrono::Utc;
use uuid::Uuid;

use geodraw_core::DistanceUnit;
use geodraw_settings::Config;

use crate::geodesy::{circle_params, ellipse_axes, RadiusMode};
use crate::model::{DerivedProperties, Geometry, Measurement, Shape, ShapeType, StyleOverrides, StyleProperties};
use crate::modes::ModeKind;
use crate::validation::{validate_geometry, ValidationResult};

/// Caller-supplied options for a new shape.
#[derive(Debug, Clone, Default)]
pub struct ShapeOptions {
    pub name: Option<String>,
    pub style: StyleOverrides,
    pub locked: bool,
}

/// A shape that has been drawn but not yet committed.
#[derive(Debug, Clone)]
pub struct TemporaryShape {
    pub shape: Shape,
    pub is_valid: bool,
    pub validation: ValidationResult,
}

/// Shape type for a geometry drawn by `mode`.
///
/// Falls back to the plain geometry type when the mode does not draw
/// shapes or produced a geometry it could not have drawn.
pub fn infer_shape_type(geometry: &Geometry, mode: ModeKind) -> ShapeType {
    match mode.shape_type() {
        Some(shape) if shape.accepts(geometry) => shape,
        _ => geometry.base_shape_type(),
    }
}

/// Circle center/radius or ellipse axes recovered from the geometry.
pub fn derive_properties(
    shape_type: ShapeType,
    geometry: &Geometry,
    unit: DistanceUnit,
) -> Option<DerivedProperties> {
    let ring = geometry.outer_ring()?;
    match shape_type {
        ShapeType::Circle => {
            let params = circle_params(ring, RadiusMode::Precise, unit)?;
            Some(DerivedProperties::Circle {
                center: params.center,
                radius: Measurement::new(params.radius, unit),
            })
        }
        ShapeType::Ellipse => {
            let params = ellipse_axes(ring, unit)?;
            Some(DerivedProperties::Ellipse {
                center: params.center,
                semi_major_axis: Measurement::new(params.semi_major, unit),
                semi_minor_axis: Measurement::new(params.semi_minor, unit),
                angle: params.angle,
            })
        }
        _ => None,
    }
}

/// Build an uncommitted shape from a freshly drawn geometry.
pub fn create_temporary_shape(
    geometry: Geometry,
    mode: ModeKind,
    options: &ShapeOptions,
    config: &Config,
) -> TemporaryShape {
    let shape_type = infer_shape_type(&geometry, mode);
    let created_at = Utc::now();
    let name = options
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| format!("{} {}", shape_type, created_at.format("%Y-%m-%d %H:%M:%S")));

    let validation = validate_geometry(&geometry, shape_type);
    let shape = Shape {
        id: Uuid::new_v4(),
        name,
        shape_type,
        derived_properties: derive_properties(shape_type, &geometry, config.mode.distance_unit),
        geometry,
        style_properties: StyleProperties::merged(&config.style, &options.style),
        locked: options.locked,
        created_at,
        last_updated: None,
    };

    if validation.is_valid {
        tracing::debug!("temporary {} '{}' created", shape.shape_type, shape.name);
    } else {
        tracing::warn!(
            "temporary {} '{}' is invalid: {}",
            shape.shape_type,
            shape.name,
            validation.errors.join("; ")
        );
    }

    TemporaryShape {
        is_valid: validation.is_valid,
        validation,
        shape,
    }
}

/// Mark a shape as saved.
pub fn commit(shape: &Shape) -> Shape {
    let mut saved = shape.clone();
    saved.last_updated = Some(Utc::now());
    tracing::info!("shape {} '{}' committed", saved.id, saved.name);
    saved
}

/// Replace the geometry, keeping identity, style and save state.
pub fn update_geometry(shape: &Shape, geometry: Geometry, unit: DistanceUnit) -> Shape {
    let mut updated = shape.clone();
    updated.derived_properties = derive_properties(shape.shape_type, &geometry, unit);
    updated.geometry = geometry;
    updated
}

/// Copy a shape as a new, uncommitted shape.
pub fn clone_shape(shape: &Shape) -> Shape {
    let mut copy = shape.clone();
    copy.id = Uuid::new_v4();
    copy.name = format!("{} (copy)", shape.name);
    copy.created_at = Utc::now();
    copy.last_updated = None;
    copy
}

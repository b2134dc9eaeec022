//! Tooltip text.
//!
//! Lengths arrive in the configured unit; areas in its square.

use geodraw_core::{format_area, format_distance};
use geodraw_settings::ModeConfig;

use crate::geodesy::{EllipseParams, RectangleDimensions};

pub fn distance_text(distance: f64, config: &ModeConfig) -> String {
    format_distance(distance, config.distance_unit, config.precision)
}

pub fn area_text(area: f64, config: &ModeConfig) -> String {
    format!("Area: {}", format_area(area, config.distance_unit, config.precision))
}

pub fn rectangle_text(dims: &RectangleDimensions, config: &ModeConfig) -> String {
    format!(
        "Width: {}\nHeight: {}\n{}",
        distance_text(dims.width, config),
        distance_text(dims.height, config),
        area_text(dims.area, config)
    )
}

/// Full axis lengths, not semi-axes.
pub fn ellipse_text(params: &EllipseParams, config: &ModeConfig) -> String {
    format!(
        "Major: {}\nMinor: {}\n{}",
        distance_text(params.semi_major * 2.0, config),
        distance_text(params.semi_minor * 2.0, config),
        area_text(params.area, config)
    )
}

pub fn diameter_text(radius: f64, config: &ModeConfig) -> String {
    format!(
        "Diameter: {}\n{}",
        distance_text(radius * 2.0, config),
        area_text(std::f64::consts::PI * radius * radius, config)
    )
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use geodraw_core::DistanceUnit;
use geodraw_settings::{LinePattern, StyleSettings};

use super::{Feature, FeatureProperties, Geometry, Position, ShapeType};

/// Rendering style attached to a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProperties {
    pub fill_color: String,
    pub line_color: String,
    pub line_width: f64,
    pub line_pattern: LinePattern,
}

impl From<&StyleSettings> for StyleProperties {
    fn from(settings: &StyleSettings) -> Self {
        Self {
            fill_color: settings.fill_color.clone(),
            line_color: settings.line_color.clone(),
            line_width: settings.line_width,
            line_pattern: settings.line_pattern,
        }
    }
}

impl Default for StyleProperties {
    fn default() -> Self {
        Self::from(&StyleSettings::default())
    }
}

impl StyleProperties {
    /// Defaults with any overrides applied on top.
    pub fn merged(defaults: &StyleSettings, overrides: &StyleOverrides) -> Self {
        let base = Self::from(defaults);
        Self {
            fill_color: overrides.fill_color.clone().unwrap_or(base.fill_color),
            line_color: overrides.line_color.clone().unwrap_or(base.line_color),
            line_width: overrides
                .line_width
                .filter(|w| w.is_finite() && *w > 0.0)
                .unwrap_or(base.line_width),
            line_pattern: overrides.line_pattern.unwrap_or(base.line_pattern),
        }
    }
}

/// Per-shape style overrides supplied at creation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOverrides {
    pub fill_color: Option<String>,
    pub line_color: Option<String>,
    pub line_width: Option<f64>,
    pub line_pattern: Option<LinePattern>,
}

/// A length together with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Measurement {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn to_meters(&self) -> f64 {
        self.unit.to_meters(self.value)
    }
}

/// Metadata computed from the geometry of circles and ellipses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DerivedProperties {
    Circle {
        center: Position,
        radius: Measurement,
    },
    #[serde(rename_all = "camelCase")]
    Ellipse {
        center: Position,
        semi_major_axis: Measurement,
        semi_minor_axis: Measurement,
        /// Bearing of the major axis in degrees, within `[0, 180)`.
        angle: f64,
    },
}

impl DerivedProperties {
    pub fn center(&self) -> Position {
        match self {
            Self::Circle { center, .. } | Self::Ellipse { center, .. } => *center,
        }
    }
}

/// The persisted domain entity produced from a drawn feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub id: Uuid,
    pub name: String,
    pub shape_type: ShapeType,
    pub geometry: Geometry,
    pub style_properties: StyleProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_properties: Option<DerivedProperties>,
    #[serde(default)]
    pub locked: bool,
    pub created_at: DateTime<Utc>,
    /// Set only when the shape is committed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Shape {
    /// Whether the shape has been committed at least once.
    pub fn is_saved(&self) -> bool {
        self.last_updated.is_some()
    }

    /// Feature suitable for loading the shape back into the edit modes.
    pub fn to_feature(&self) -> Feature {
        Feature {
            geometry: self.geometry.clone(),
            properties: FeatureProperties {
                shape: Some(self.shape_type),
                locked: self.locked,
            },
        }
    }
}

//! Distance unit handling
//!
//! Geodesic measurements are computed in meters and converted to the unit the
//! host selected for display. Areas are reported in the square of that unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Distance unit selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Kilometers
    Kilometers,
    /// Meters
    Meters,
    /// International nautical miles
    NauticalMiles,
    /// Statute miles
    Miles,
    /// International feet
    Feet,
}

impl Default for DistanceUnit {
    fn default() -> Self {
        Self::Kilometers
    }
}

impl DistanceUnit {
    /// All supported units, in display order.
    pub const ALL: [DistanceUnit; 5] = [
        Self::Kilometers,
        Self::Meters,
        Self::NauticalMiles,
        Self::Miles,
        Self::Feet,
    ];

    /// Number of meters in one of this unit.
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Self::Kilometers => 1000.0,
            Self::Meters => 1.0,
            Self::NauticalMiles => 1852.0,
            Self::Miles => 1609.344,
            Self::Feet => 0.3048,
        }
    }

    /// Convert a length in meters to this unit.
    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }

    /// Convert a length in this unit to meters.
    pub fn to_meters(self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }

    /// Convert an area in square meters to the square of this unit.
    pub fn area_from_square_meters(self, square_meters: f64) -> f64 {
        let m = self.meters_per_unit();
        square_meters / (m * m)
    }

    /// Convert a length between two units.
    pub fn convert(self, value: f64, target: DistanceUnit) -> f64 {
        target.from_meters(self.to_meters(value))
    }

    /// Short label used in tooltips ("km", "m", "nmi", "mi", "ft").
    pub fn label(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Meters => "m",
            Self::NauticalMiles => "nmi",
            Self::Miles => "mi",
            Self::Feet => "ft",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kilometers => write!(f, "Kilometers"),
            Self::Meters => write!(f, "Meters"),
            Self::NauticalMiles => write!(f, "Nautical Miles"),
            Self::Miles => write!(f, "Miles"),
            Self::Feet => write!(f, "Feet"),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "km" | "kilometers" | "kilometres" => Ok(Self::Kilometers),
            "m" | "meters" | "metres" => Ok(Self::Meters),
            "nmi" | "nm" | "nautical_miles" | "nauticalmiles" => Ok(Self::NauticalMiles),
            "mi" | "miles" => Ok(Self::Miles),
            "ft" | "feet" => Ok(Self::Feet),
            _ => Err(Error::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

/// Format a length for display
///
/// * `value` - Length already expressed in `unit`
/// * `unit` - Unit to label the value with
/// * `precision` - Number of decimals
pub fn format_distance(value: f64, unit: DistanceUnit, precision: usize) -> String {
    format!("{:.*} {}", precision, value, unit.label())
}

/// Format an area for display
///
/// * `value` - Area already expressed in square `unit`
pub fn format_area(value: f64, unit: DistanceUnit, precision: usize) -> String {
    format!("{:.*} {}²", precision, value, unit.label())
}

//! Shared numeric constants.

/// Mean Earth radius in meters, used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Equatorial Earth radius in meters, used for spherical polygon areas.
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Valid longitude range in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Valid latitude range in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Tolerance for treating two coordinates as the same point, in degrees.
pub const COORDINATE_EPSILON: f64 = 1e-9;

/// Default number of decimals when formatting coordinates for display.
pub const DEFAULT_COORDINATE_PRECISION: usize = 6;

/// Default number of decimals for tooltip measurements.
pub const DEFAULT_MEASUREMENT_PRECISION: usize = 2;

//! Coordinate text in `"latitude, longitude"` order.

use crate::model::Position;

/// Parse `"latitude, longitude"`.
///
/// Returns `None` unless the text holds exactly two finite numbers separated
/// by a comma. Range checks are left to validation.
pub fn parse_coordinate(text: &str) -> Option<Position> {
    let mut parts = text.split(',').map(str::trim);
    let lat = parts.next()?.parse::<f64>().ok()?;
    let lon = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() || !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some(Position::new(lon, lat))
}

/// Format as `"latitude, longitude"` with `precision` decimals.
pub fn format_coordinate(position: Position, precision: usize) -> String {
    format!(
        "{:.*}, {:.*}",
        precision, position.lat, precision, position.lon
    )
}

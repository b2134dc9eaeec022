//! Geodesic helpers over longitude/latitude coordinates.
//!
//! Everything here is a pure function. Inputs that cannot produce a
//! meaningful answer (too few vertices, zero-length axes) yield `None`
//! rather than an error; callers decide how to surface that.

pub mod circle;
pub mod coords;
pub mod ellipse;
pub mod measure;
pub mod square;
pub mod transform;

pub use circle::{adaptive_steps, centroid, circle_params, circle_polygon, CircleParams, RadiusMode};
pub use coords::{format_coordinate, parse_coordinate};
pub use ellipse::{ellipse_axes, ellipse_from_clicks, ellipse_polygon, EllipseParams};
pub use measure::{
    bearing, destination, distance, distance_m, line_length, midpoint, perimeter, polygon_area,
    ring_area_m2,
};
pub use square::{rectangle_dimensions, rectangle_ring, resize_corner, square_corner, RectangleDimensions};
pub use transform::{scale_geometry, translate_geometry};

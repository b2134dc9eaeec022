use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use geodraw_core::constants::{COORDINATE_EPSILON, DEFAULT_COORDINATE_PRECISION};

use crate::geodesy::coords::{format_coordinate, parse_coordinate};

mod shape;

pub use shape::{DerivedProperties, Measurement, Shape, StyleOverrides, StyleProperties};

/// A geographic coordinate in degrees.
///
/// Serialized as a `[longitude, latitude]` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Compare two positions within [`COORDINATE_EPSILON`] degrees.
    pub fn approx_eq(&self, other: &Position) -> bool {
        (self.lon - other.lon).abs() <= COORDINATE_EPSILON
            && (self.lat - other.lat).abs() <= COORDINATE_EPSILON
    }
}

impl From<[f64; 2]> for Position {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.lon, p.lat]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_COORDINATE_PRECISION);
        write!(f, "{}", format_coordinate(*self, precision))
    }
}

/// Parses `"latitude, longitude"` text.
impl FromStr for Position {
    type Err = geodraw_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s).ok_or_else(|| {
            geodraw_core::Error::invalid_coordinate(s, "expected 'latitude, longitude'")
        })
    }
}

/// Axis-aligned extent of a geometry in coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn from_positions<'a>(positions: impl IntoIterator<Item = &'a Position>) -> Option<Self> {
        let mut iter = positions.into_iter();
        let first = iter.next()?;
        let mut bbox = Self {
            min_lon: first.lon,
            min_lat: first.lat,
            max_lon: first.lon,
            max_lat: first.lat,
        };
        for p in iter {
            bbox.min_lon = bbox.min_lon.min(p.lon);
            bbox.min_lat = bbox.min_lat.min(p.lat);
            bbox.max_lon = bbox.max_lon.max(p.lon);
            bbox.max_lat = bbox.max_lat.max(p.lat);
        }
        Some(bbox)
    }

    /// Corners in handle order: south-west, north-west, north-east, south-east.
    pub fn corners(&self) -> [Position; 4] {
        [
            Position::new(self.min_lon, self.min_lat),
            Position::new(self.min_lon, self.max_lat),
            Position::new(self.max_lon, self.max_lat),
            Position::new(self.max_lon, self.min_lat),
        ]
    }

    /// Closed ring tracing the box, starting at the south-west corner.
    pub fn ring(&self) -> Vec<Position> {
        let [sw, nw, ne, se] = self.corners();
        vec![sw, nw, ne, se, sw]
    }
}

/// Geometry of a drawn feature.
///
/// Serialized GeoJSON style as `{"type": ..., "coordinates": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Position),
    LineString(Vec<Position>),
    /// Outer ring followed by any hole rings.
    Polygon(Vec<Vec<Position>>),
}

impl Geometry {
    /// The plain shape type implied by the geometry alone.
    pub fn base_shape_type(&self) -> ShapeType {
        match self {
            Geometry::Point(_) => ShapeType::Point,
            Geometry::LineString(_) => ShapeType::LineString,
            Geometry::Polygon(_) => ShapeType::Polygon,
        }
    }

    pub fn outer_ring(&self) -> Option<&[Position]> {
        match self {
            Geometry::Polygon(rings) => rings.first().map(Vec::as_slice),
            _ => None,
        }
    }

    pub fn outer_ring_mut(&mut self) -> Option<&mut Vec<Position>> {
        match self {
            Geometry::Polygon(rings) => rings.first_mut(),
            _ => None,
        }
    }

    /// All coordinates, rings flattened in order.
    pub fn positions(&self) -> Vec<Position> {
        match self {
            Geometry::Point(p) => vec![*p],
            Geometry::LineString(line) => line.clone(),
            Geometry::Polygon(rings) => rings.iter().flatten().copied().collect(),
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_positions(&self.positions())
    }

    /// Apply `f` to every coordinate.
    pub fn map_positions(&self, mut f: impl FnMut(Position) -> Position) -> Geometry {
        match self {
            Geometry::Point(p) => Geometry::Point(f(*p)),
            Geometry::LineString(line) => Geometry::LineString(line.iter().map(|p| f(*p)).collect()),
            Geometry::Polygon(rings) => Geometry::Polygon(
                rings
                    .iter()
                    .map(|ring| ring.iter().map(|p| f(*p)).collect())
                    .collect(),
            ),
        }
    }

    /// Look up a coordinate by position indexes.
    ///
    /// Points take `[]`, lines `[vertex]`, polygons `[ring, vertex]`.
    pub fn position(&self, indexes: &[usize]) -> Option<Position> {
        match (self, indexes) {
            (Geometry::Point(p), []) => Some(*p),
            (Geometry::LineString(line), [i]) => line.get(*i).copied(),
            (Geometry::Polygon(rings), [r, i]) => rings.get(*r)?.get(*i).copied(),
            _ => None,
        }
    }

    /// Replace a coordinate in place. Moving either end of a ring moves the
    /// other end too so the ring stays closed.
    pub fn set_position(&mut self, indexes: &[usize], position: Position) -> bool {
        match (self, indexes) {
            (Geometry::Point(p), []) => {
                *p = position;
                true
            }
            (Geometry::LineString(line), [i]) => match line.get_mut(*i) {
                Some(slot) => {
                    *slot = position;
                    true
                }
                None => false,
            },
            (Geometry::Polygon(rings), [r, i]) => {
                let Some(ring) = rings.get_mut(*r) else {
                    return false;
                };
                let last = ring.len().saturating_sub(1);
                if *i > last || ring.is_empty() {
                    return false;
                }
                ring[*i] = position;
                if *i == 0 {
                    ring[last] = position;
                } else if *i == last {
                    ring[0] = position;
                }
                true
            }
            _ => false,
        }
    }

    /// Insert a new coordinate before `indexes`. The closing coordinate of a
    /// ring cannot be displaced.
    pub fn insert_position(&mut self, indexes: &[usize], position: Position) -> bool {
        match (self, indexes) {
            (Geometry::LineString(line), [i]) if *i <= line.len() => {
                line.insert(*i, position);
                true
            }
            (Geometry::Polygon(rings), [r, i]) => match rings.get_mut(*r) {
                Some(ring) if *i >= 1 && *i < ring.len() => {
                    ring.insert(*i, position);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }
}

/// Kind of shape a feature represents.
///
/// Rectangle, Circle and Ellipse are polygon geometries carrying extra
/// derived metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Point,
    LineString,
    Polygon,
    Rectangle,
    Circle,
    Ellipse,
}

impl ShapeType {
    pub const ALL: [ShapeType; 6] = [
        Self::Point,
        Self::LineString,
        Self::Polygon,
        Self::Rectangle,
        Self::Circle,
        Self::Ellipse,
    ];

    /// Whether the shape is stored as a polygon geometry.
    pub fn is_polygonal(self) -> bool {
        !matches!(self, Self::Point | Self::LineString)
    }

    /// Whether a geometry of this variant can carry this shape type.
    pub fn accepts(self, geometry: &Geometry) -> bool {
        match geometry {
            Geometry::Point(_) => self == Self::Point,
            Geometry::LineString(_) => self == Self::LineString,
            Geometry::Polygon(_) => self.is_polygonal(),
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Ellipse => "Ellipse",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureProperties {
    /// Shape flag set by the draw mode that produced the feature.
    pub shape: Option<ShapeType>,
    /// Locked features are never modified by edit modes.
    pub locked: bool,
}

/// A geometry together with the flags edit modes consult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: FeatureProperties,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: FeatureProperties::default(),
        }
    }

    pub fn with_shape(mut self, shape: ShapeType) -> Self {
        self.properties.shape = Some(shape);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.properties.locked = locked;
        self
    }

    /// The flagged shape type, falling back to what the geometry implies.
    pub fn shape_type(&self) -> ShapeType {
        match self.properties.shape {
            Some(shape) if shape.accepts(&self.geometry) => shape,
            _ => self.geometry.base_shape_type(),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.properties.locked
    }
}

/// The collection of features handed between the host and the modes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    /// Copy of the collection with `feature` appended.
    pub fn with_feature(&self, feature: Feature) -> FeatureCollection {
        let mut updated = self.clone();
        updated.features.push(feature);
        updated
    }

    /// Copy of the collection with the geometry at `index` replaced.
    pub fn with_geometry(&self, index: usize, geometry: Geometry) -> FeatureCollection {
        let mut updated = self.clone();
        if let Some(feature) = updated.features.get_mut(index) {
            feature.geometry = geometry;
        }
        updated
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

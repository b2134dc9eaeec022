//! # Geodraw Designer
//!
//! Interactive drawing and editing of shapes on a geographic map. The
//! host renders the map and reports pointer events; this crate turns them
//! into geometry.
//!
//! ## Core Components
//!
//! - **Geodesy**: great-circle distance, bearing, spherical area, circle and
//!   ellipse parameter recovery, adaptive tessellation, square projection
//! - **Validation**: structural and numeric checks producing errors and
//!   warnings
//! - **Draw modes**: point, line, polygon, rectangle, circle and ellipse
//!   click sequences with live tooltips
//! - **Edit modes**: vertex editing, rectangle corner resize, circle
//!   resize/translate and bounding-box scale
//! - **Registry**: one long-lived instance per mode
//! - **Lifecycle**: temporary shape creation, commit, update and clone
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── ModeRegistry ──> InteractionMode (draw / edit)
//!   │                        └── geodesy
//!   ├── FeatureCollection (working data)
//!   └── lifecycle ──> Shape
//!                      └── validation
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geodraw_designer::{ClickEvent, DesignerState, ModeKind, Position};
//!
//! let mut state = DesignerState::default();
//! state.set_mode(ModeKind::DrawCircle);
//! state.click(&ClickEvent::at(Position::new(-122.4, 37.8)));
//! let actions = state.click(&ClickEvent::at(Position::new(-122.39, 37.8)));
//! ```

pub mod designer_state;
pub mod geodesy;
pub mod lifecycle;
pub mod model;
pub mod modes;
pub mod validation;

pub use designer_state::DesignerState;
pub use lifecycle::{
    clone_shape, commit, create_temporary_shape, derive_properties, infer_shape_type,
    update_geometry, ShapeOptions, TemporaryShape,
};
pub use model::{
    BoundingBox, DerivedProperties, Feature, FeatureCollection, FeatureProperties, Geometry,
    Measurement, Position, Shape, ShapeType, StyleOverrides, StyleProperties,
};
pub use modes::{
    ClickEvent, DragEvent, EditAction, EditContext, EditHandle, EditType, Guide, HandleType,
    InteractionMode, Key, ModeHandle, ModeKind, ModeProps, ModeRegistry, Modifiers, Pick,
    PickTarget, PointerMoveEvent, ScreenPoint, Tooltip,
};
pub use validation::{validate_feature, validate_geometry, validate_shape, ValidationResult};

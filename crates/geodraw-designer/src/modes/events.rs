//! Events delivered by the host and actions handed back to it.

use serde::{Deserialize, Serialize};

use crate::model::{FeatureCollection, Position};

/// Pixel coordinates relative to the map canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Modifier keys held while the event fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Square/aspect constraint, typically Shift.
    pub constrain: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn constrained() -> Self {
        Self {
            constrain: true,
            ..Default::default()
        }
    }
}

/// Kind of edit handle shown on a selected feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleType {
    /// An existing vertex.
    Existing,
    /// Midpoint of an edge; dragging it inserts a vertex.
    Intermediate,
    /// Bounding-box corner used for scaling.
    Scale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditHandle {
    pub position: Position,
    pub feature_index: usize,
    /// `[]` for points, `[vertex]` for lines, `[ring, vertex]` for polygons.
    /// Scale handles carry `[corner]`.
    pub position_indexes: Vec<usize>,
    pub handle_type: HandleType,
}

/// What a pick landed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PickTarget {
    /// The body of a feature.
    Feature { feature_index: usize },
    Handle(EditHandle),
}

impl PickTarget {
    pub fn feature_index(&self) -> usize {
        match self {
            PickTarget::Feature { feature_index } => *feature_index,
            PickTarget::Handle(handle) => handle.feature_index,
        }
    }
}

/// An object under the pointer, as reported by the host.
///
/// Hosts also report picks for things that are not geometry at all, such
/// as tooltip labels; those arrive with `target: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub index: usize,
    pub is_guide: bool,
    pub target: Option<PickTarget>,
}

impl Pick {
    pub fn feature(feature_index: usize) -> Self {
        Self {
            index: feature_index,
            is_guide: false,
            target: Some(PickTarget::Feature { feature_index }),
        }
    }

    pub fn handle(handle: EditHandle) -> Self {
        Self {
            index: handle.feature_index,
            is_guide: true,
            target: Some(PickTarget::Handle(handle)),
        }
    }

    /// A pick on something that is not geometry.
    pub fn label(index: usize) -> Self {
        Self {
            index,
            is_guide: true,
            target: None,
        }
    }

    pub fn edit_handle(&self) -> Option<&EditHandle> {
        match &self.target {
            Some(PickTarget::Handle(handle)) => Some(handle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClickEvent {
    pub map_coords: Position,
    pub screen_coords: ScreenPoint,
    pub picks: Vec<Pick>,
    pub modifiers: Modifiers,
}

impl ClickEvent {
    pub fn at(map_coords: Position) -> Self {
        Self {
            map_coords,
            ..Default::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerMoveEvent {
    pub map_coords: Position,
    pub screen_coords: ScreenPoint,
    pub picks: Vec<Pick>,
    pub modifiers: Modifiers,
}

impl PointerMoveEvent {
    pub fn at(map_coords: Position) -> Self {
        Self {
            map_coords,
            ..Default::default()
        }
    }

    pub fn with_picks(mut self, picks: Vec<Pick>) -> Self {
        self.picks = picks;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Drag start, drag tick or drag stop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragEvent {
    pub map_coords: Position,
    pub screen_coords: ScreenPoint,
    pub picks: Vec<Pick>,
    pub modifiers: Modifiers,
}

impl DragEvent {
    pub fn at(map_coords: Position) -> Self {
        Self {
            map_coords,
            ..Default::default()
        }
    }

    pub fn with_picks(mut self, picks: Vec<Pick>) -> Self {
        self.picks = picks;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other(String),
}

/// Text shown next to the pointer while drawing or editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub position: Position,
    pub text: String,
}

impl Tooltip {
    pub fn new(position: Position, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditType {
    AddFeature,
    AddTentativePosition,
    AddPosition,
    MovePosition,
    FinishMovePosition,
    Translating,
    FinishTranslating,
    Scaling,
    FinishScaling,
}

impl EditType {
    /// Whether the edit ends an interaction rather than reporting progress.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            Self::AddFeature | Self::FinishMovePosition | Self::FinishTranslating | Self::FinishScaling
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditContext {
    pub feature_indexes: Vec<usize>,
    pub position_indexes: Vec<usize>,
    pub position: Option<Position>,
}

impl EditContext {
    pub fn feature(index: usize) -> Self {
        Self {
            feature_indexes: vec![index],
            ..Default::default()
        }
    }
}

/// Payload of the "edit applied" callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAction {
    pub updated_data: FeatureCollection,
    pub edit_type: EditType,
    pub edit_context: EditContext,
}

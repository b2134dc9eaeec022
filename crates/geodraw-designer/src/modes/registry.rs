//! Long-lived mode instances.
//!
//! The host wires pointer handlers to a mode by identity, so a fresh
//! instance per render would detach them. The registry creates each mode
//! the first time it is asked for and hands out the same handle from then
//! on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use geodraw_core::shared;

use crate::model::ShapeType;

use super::draw::{
    DrawCircleMode, DrawEllipseMode, DrawLineStringMode, DrawPointMode, DrawPolygonMode,
    DrawRectangleMode, ViewMode,
};
use super::edit::{ModifyMode, ResizeCircleMode, ResizeRectangleMode, ScaleMode};
use super::InteractionMode;

/// Shared handle to a mode instance.
pub type ModeHandle = Rc<RefCell<dyn InteractionMode>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeKind {
    #[default]
    View,
    DrawPoint,
    DrawLineString,
    DrawPolygon,
    DrawRectangle,
    DrawCircle,
    DrawEllipse,
    Modify,
    ResizeRectangle,
    ResizeCircle,
    Scale,
}

impl ModeKind {
    pub const ALL: [ModeKind; 11] = [
        Self::View,
        Self::DrawPoint,
        Self::DrawLineString,
        Self::DrawPolygon,
        Self::DrawRectangle,
        Self::DrawCircle,
        Self::DrawEllipse,
        Self::Modify,
        Self::ResizeRectangle,
        Self::ResizeCircle,
        Self::Scale,
    ];

    /// Draw mode producing `shape`.
    pub fn draw_for(shape: ShapeType) -> Self {
        match shape {
            ShapeType::Point => Self::DrawPoint,
            ShapeType::LineString => Self::DrawLineString,
            ShapeType::Polygon => Self::DrawPolygon,
            ShapeType::Rectangle => Self::DrawRectangle,
            ShapeType::Circle => Self::DrawCircle,
            ShapeType::Ellipse => Self::DrawEllipse,
        }
    }

    /// Edit mode used to reshape `shape`.
    pub fn edit_for(shape: ShapeType) -> Self {
        match shape {
            ShapeType::Rectangle => Self::ResizeRectangle,
            ShapeType::Circle => Self::ResizeCircle,
            ShapeType::Ellipse => Self::Scale,
            ShapeType::Point | ShapeType::LineString | ShapeType::Polygon => Self::Modify,
        }
    }

    /// Shape produced by a draw mode.
    pub fn shape_type(self) -> Option<ShapeType> {
        match self {
            Self::DrawPoint => Some(ShapeType::Point),
            Self::DrawLineString => Some(ShapeType::LineString),
            Self::DrawPolygon => Some(ShapeType::Polygon),
            Self::DrawRectangle => Some(ShapeType::Rectangle),
            Self::DrawCircle => Some(ShapeType::Circle),
            Self::DrawEllipse => Some(ShapeType::Ellipse),
            _ => None,
        }
    }

    pub fn is_draw(self) -> bool {
        self.shape_type().is_some()
    }

    fn create(self) -> ModeHandle {
        match self {
            Self::View => shared(ViewMode),
            Self::DrawPoint => shared(DrawPointMode::new()),
            Self::DrawLineString => shared(DrawLineStringMode::new()),
            Self::DrawPolygon => shared(DrawPolygonMode::new()),
            Self::DrawRectangle => shared(DrawRectangleMode::new()),
            Self::DrawCircle => shared(DrawCircleMode::new()),
            Self::DrawEllipse => shared(DrawEllipseMode::new()),
            Self::Modify => shared(ModifyMode::new()),
            Self::ResizeRectangle => shared(ResizeRectangleMode::new()),
            Self::ResizeCircle => shared(ResizeCircleMode::new()),
            Self::Scale => shared(ScaleMode::new()),
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Lazily populated cache of one instance per [`ModeKind`].
#[derive(Default)]
pub struct ModeRegistry {
    modes: HashMap<ModeKind, ModeHandle>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for `kind`, created on first use.
    pub fn get(&mut self, kind: ModeKind) -> ModeHandle {
        self.modes
            .entry(kind)
            .or_insert_with(|| {
                tracing::debug!("creating {} mode instance", kind);
                kind.create()
            })
            .clone()
    }

    pub fn draw_mode_for(&mut self, shape: ShapeType) -> ModeHandle {
        self.get(ModeKind::draw_for(shape))
    }

    pub fn edit_mode_for(&mut self, shape: ShapeType) -> ModeHandle {
        self.get(ModeKind::edit_for(shape))
    }

    pub fn contains(&self, kind: ModeKind) -> bool {
        self.modes.contains_key(&kind)
    }

    /// Number of instances created so far.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Reset every instantiated mode.
    pub fn cancel_all(&self) {
        for mode in self.modes.values() {
            mode.borrow_mut().cancel();
        }
    }
}

impl fmt::Debug for ModeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeRegistry")
            .field("modes", &self.modes.keys().collect::<Vec<_>>())
            .finish()
    }
}

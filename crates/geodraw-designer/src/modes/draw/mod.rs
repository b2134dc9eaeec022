//! Draw modes.
//!
//! Each mode accumulates clicks in a [`ClickSequence`], previews the shape
//! on pointer move and emits an `AddFeature` edit once the shape is
//! complete, returning to idle.

mod circle;
mod ellipse;
mod line_string;
mod point;
mod polygon;
mod rectangle;

pub use circle::DrawCircleMode;
pub use ellipse::DrawEllipseMode;
pub use line_string::DrawLineStringMode;
pub use point::DrawPointMode;
pub use polygon::DrawPolygonMode;
pub use rectangle::DrawRectangleMode;

use crate::model::{Feature, Geometry, Position, ShapeType};

use super::events::{EditContext, EditType, Tooltip};
use super::tooltip::distance_text;
use super::{InteractionMode, ModeProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    Accumulating,
}

/// Clicks recorded by an in-progress draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickSequence {
    clicks: Vec<Position>,
}

impl ClickSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: Position) {
        self.clicks.push(position);
    }

    pub fn len(&self) -> usize {
        self.clicks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clicks.is_empty()
    }

    pub fn first(&self) -> Option<Position> {
        self.clicks.first().copied()
    }

    pub fn last(&self) -> Option<Position> {
        self.clicks.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        self.clicks.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.clicks
    }

    pub fn clear(&mut self) {
        self.clicks.clear();
    }

    pub fn state(&self) -> DrawState {
        if self.clicks.is_empty() {
            DrawState::Idle
        } else {
            DrawState::Accumulating
        }
    }

    /// Drop repeated clicks at the end of the sequence. A double-click
    /// arrives as two clicks on the same spot before the finish signal.
    pub fn trim_trailing_duplicates(&mut self) {
        while self.clicks.len() > 1 {
            let n = self.clicks.len();
            if self.clicks[n - 1].approx_eq(&self.clicks[n - 2]) {
                self.clicks.pop();
            } else {
                break;
            }
        }
    }
}

/// Append the finished geometry as a new feature flagged with `shape`.
pub(crate) fn emit_feature(props: &mut ModeProps<'_>, geometry: Geometry, shape: ShapeType) {
    let index = props.data.len();
    let updated = props.data.with_feature(Feature::new(geometry).with_shape(shape));
    tracing::debug!("{} drawn as feature {}", shape, index);
    props.emit(updated, EditType::AddFeature, EditContext::feature(index));
}

/// Report a click that did not complete the shape.
pub(crate) fn emit_tentative(props: &mut ModeProps<'_>, position: Position, click_count: usize) {
    let data = props.data.clone();
    props.emit(
        data,
        EditType::AddTentativePosition,
        EditContext {
            position_indexes: vec![click_count.saturating_sub(1)],
            position: Some(position),
            ..Default::default()
        },
    );
}

/// Tooltip with the ground distance from the last click to the pointer.
pub(crate) fn segment_tooltip(from: Position, pointer: Position, props: &ModeProps<'_>) -> Tooltip {
    let d = crate::geodesy::distance(from, pointer, props.config.distance_unit);
    Tooltip::new(pointer, distance_text(d, props.config))
}

/// The idle mode: ignores every event.
#[derive(Debug, Default)]
pub struct ViewMode;

impl InteractionMode for ViewMode {
    fn name(&self) -> &'static str {
        "view"
    }
}

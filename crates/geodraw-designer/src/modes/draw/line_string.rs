use crate::model::{Geometry, Position, ShapeType};
use crate::modes::events::{ClickEvent, PointerMoveEvent, Tooltip};
use crate::modes::{InteractionMode, ModeProps};

use super::{emit_feature, emit_tentative, segment_tooltip, ClickSequence};

const MIN_POINTS: usize = 2;

/// Appends a vertex per click; finishes on double-click or Enter.
#[derive(Debug, Default)]
pub struct DrawLineStringMode {
    clicks: ClickSequence,
    pointer: Option<Position>,
    tooltip: Option<Tooltip>,
}

impl DrawLineStringMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> &ClickSequence {
        &self.clicks
    }
}

impl InteractionMode for DrawLineStringMode {
    fn name(&self) -> &'static str {
        "draw-line-string"
    }

    fn handle_click(&mut self, event: &ClickEvent, props: &mut ModeProps<'_>) {
        self.clicks.push(event.map_coords);
        tracing::trace!("line vertex {} at {}", self.clicks.len(), event.map_coords);
        emit_tentative(props, event.map_coords, self.clicks.len());
    }

    fn handle_pointer_move(&mut self, event: &PointerMoveEvent, props: &mut ModeProps<'_>) {
        let Some(last) = self.clicks.last() else {
            return;
        };
        self.pointer = Some(event.map_coords);
        self.tooltip = Some(segment_tooltip(last, event.map_coords, props));
    }

    fn finish(&mut self, props: &mut ModeProps<'_>) {
        self.clicks.trim_trailing_duplicates();
        if self.clicks.len() < MIN_POINTS {
            tracing::debug!("line finish ignored with {} point(s)", self.clicks.len());
            return;
        }
        let line = self.clicks.as_slice().to_vec();
        self.cancel();
        emit_feature(props, Geometry::LineString(line), ShapeType::LineString);
    }

    fn cancel(&mut self) {
        self.clicks.clear();
        self.pointer = None;
        self.tooltip = None;
    }

    fn tooltips(&self) -> Vec<Tooltip> {
        self.tooltip.iter().cloned().collect()
    }

    fn tentative(&self) -> Option<Geometry> {
        if self.clicks.is_empty() {
            return None;
        }
        let mut line = self.clicks.as_slice().to_vec();
        line.extend(self.pointer);
        Some(Geometry::LineString(line))
    }
}

use crate::model::{Geometry, Position, ShapeType};
use crate::modes::events::{ClickEvent, PointerMoveEvent, Tooltip};
use crate::modes::{InteractionMode, ModeProps};

use super::{emit_feature, emit_tentative, segment_tooltip, ClickSequence};

const MIN_POINTS: usize = 3;

/// Appends a vertex per click; on finish the ring is closed by repeating
/// the first click.
#[derive(Debug, Default)]
pub struct DrawPolygonMode {
    clicks: ClickSequence,
    pointer: Option<Position>,
    tooltip: Option<Tooltip>,
}

impl DrawPolygonMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> &ClickSequence {
        &self.clicks
    }
}

impl InteractionMode for DrawPolygonMode {
    fn name(&self) -> &'static str {
        "draw-polygon"
    }

    fn handle_click(&mut self, event: &ClickEvent, props: &mut ModeProps<'_>) {
        self.clicks.push(event.map_coords);
        tracing::trace!("polygon vertex {} at {}", self.clicks.len(), event.map_coords);
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
            tracing::debug!("polygon finish ignored with {} point(s)", self.clicks.len());
            return;
        }
        let mut ring = self.clicks.as_slice().to_vec();
        ring.push(ring[0]);
        self.cancel();
        emit_feature(props, Geometry::Polygon(vec![ring]), ShapeType::Polygon);
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
        let first = self.clicks.first()?;
        let mut points = self.clicks.as_slice().to_vec();
        points.extend(self.pointer);
        if points.len() < MIN_POINTS {
            return Some(Geometry::LineString(points));
        }
        points.push(first);
        Some(Geometry::Polygon(vec![points]))
    }
}

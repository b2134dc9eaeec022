use crate::geodesy::{rectangle_dimensions, rectangle_ring, square_corner};
use crate::model::{Geometry, Position, ShapeType};
use crate::modes::events::{ClickEvent, PointerMoveEvent, Tooltip};
use crate::modes::tooltip::rectangle_text;
use crate::modes::{InteractionMode, ModeProps};

use super::{emit_feature, emit_tentative, ClickSequence};

/// Two clicks on opposite corners. Holding the constrain modifier while
/// placing the second corner draws a square.
#[derive(Debug, Default)]
pub struct DrawRectangleMode {
    clicks: ClickSequence,
    pointer: Option<Position>,
    constrain: bool,
    tooltip: Option<Tooltip>,
}

impl DrawRectangleMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> &ClickSequence {
        &self.clicks
    }

    fn corner(anchor: Position, free: Position, constrain: bool) -> Position {
        if constrain {
            square_corner(anchor, free)
        } else {
            free
        }
    }
}

impl InteractionMode for DrawRectangleMode {
    fn name(&self) -> &'static str {
        "draw-rectangle"
    }

    fn handle_click(&mut self, event: &ClickEvent, props: &mut ModeProps<'_>) {
        let Some(anchor) = self.clicks.first() else {
            self.clicks.push(event.map_coords);
            emit_tentative(props, event.map_coords, 1);
            return;
        };

        let corner = Self::corner(anchor, event.map_coords, event.modifiers.constrain);
        if (corner.lon - anchor.lon).abs() < f64::EPSILON || (corner.lat - anchor.lat).abs() < f64::EPSILON {
            tracing::debug!("rectangle corner ignored: zero width or height");
            return;
        }
        self.cancel();
        emit_feature(
            props,
            Geometry::Polygon(vec![rectangle_ring(anchor, corner)]),
            ShapeType::Rectangle,
        );
    }

    fn handle_pointer_move(&mut self, event: &PointerMoveEvent, props: &mut ModeProps<'_>) {
        let Some(anchor) = self.clicks.first() else {
            return;
        };
        self.pointer = Some(event.map_coords);
        self.constrain = event.modifiers.constrain;

        let corner = Self::corner(anchor, event.map_coords, self.constrain);
        self.tooltip = rectangle_dimensions(&rectangle_ring(anchor, corner), props.config.distance_unit)
            .map(|dims| Tooltip::new(event.map_coords, rectangle_text(&dims, props.config)));
    }

    fn cancel(&mut self) {
        self.clicks.clear();
        self.pointer = None;
        self.constrain = false;
        self.tooltip = None;
    }

    fn tooltips(&self) -> Vec<Tooltip> {
        self.tooltip.iter().cloned().collect()
    }

    fn tentative(&self) -> Option<Geometry> {
        let anchor = self.clicks.first()?;
        let corner = Self::corner(anchor, self.pointer?, self.constrain);
        Some(Geometry::Polygon(vec![rectangle_ring(anchor, corner)]))
    }
}

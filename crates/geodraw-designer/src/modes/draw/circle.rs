use std::f64::consts::PI;

use geodraw_core::DistanceUnit;

use crate::geodesy::{adaptive_steps, circle_polygon, distance_m};
use crate::model::{Geometry, Position, ShapeType};
use crate::modes::events::{ClickEvent, PointerMoveEvent, Tooltip};
use crate::modes::tooltip::area_text;
use crate::modes::{InteractionMode, ModeProps};

use super::{emit_feature, emit_tentative, ClickSequence};

/// Center click, then a click on the edge.
#[derive(Debug, Default)]
pub struct DrawCircleMode {
    clicks: ClickSequence,
    tooltip: Option<Tooltip>,
    tentative: Option<Geometry>,
}

impl DrawCircleMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> &ClickSequence {
        &self.clicks
    }

    fn ring(center: Position, radius_m: f64, props: &ModeProps<'_>) -> Vec<Position> {
        let radius_km = DistanceUnit::Kilometers.from_meters(radius_m);
        circle_polygon(center, radius_m, adaptive_steps(radius_km, &props.config.tessellation))
    }
}

impl InteractionMode for DrawCircleMode {
    fn name(&self) -> &'static str {
        "draw-circle"
    }

    fn handle_click(&mut self, event: &ClickEvent, props: &mut ModeProps<'_>) {
        let Some(center) = self.clicks.first() else {
            self.clicks.push(event.map_coords);
            emit_tentative(props, event.map_coords, 1);
            return;
        };

        let radius_m = distance_m(center, event.map_coords);
        if !(radius_m.is_finite() && radius_m > 0.0) {
            tracing::debug!("circle edge ignored: zero radius");
            return;
        }
        let ring = Self::ring(center, radius_m, props);
        self.cancel();
        emit_feature(props, Geometry::Polygon(vec![ring]), ShapeType::Circle);
    }

    fn handle_pointer_move(&mut self, event: &PointerMoveEvent, props: &mut ModeProps<'_>) {
        let Some(center) = self.clicks.first() else {
            return;
        };
        let radius_m = distance_m(center, event.map_coords);
        let radius = props.config.distance_unit.from_meters(radius_m);
        self.tooltip = Some(Tooltip::new(
            event.map_coords,
            area_text(PI * radius * radius, props.config),
        ));
        self.tentative = (radius_m > 0.0)
            .then(|| Geometry::Polygon(vec![Self::ring(center, radius_m, props)]));
    }

    fn cancel(&mut self) {
        self.clicks.clear();
        self.tooltip = None;
        self.tentative = None;
    }

    fn tooltips(&self) -> Vec<Tooltip> {
        self.tooltip.iter().cloned().collect()
    }

    fn tentative(&self) -> Option<Geometry> {
        self.tentative.clone()
    }
}

use geodraw_core::DistanceUnit;

use crate::geodesy::{adaptive_steps, ellipse_from_clicks, ellipse_polygon, EllipseParams};
use crate::model::{Geometry, Position, ShapeType};
use crate::modes::events::{ClickEvent, PointerMoveEvent, Tooltip};
use crate::modes::tooltip::ellipse_text;
use crate::modes::{InteractionMode, ModeProps};

use super::{emit_feature, emit_tentative, segment_tooltip, ClickSequence};

/// Three clicks: both ends of the major axis, then the edge of the minor axis.
#[derive(Debug, Default)]
pub struct DrawEllipseMode {
    clicks: ClickSequence,
    tooltip: Option<Tooltip>,
    tentative: Option<Geometry>,
}

impl DrawEllipseMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> &ClickSequence {
        &self.clicks
    }

    fn ring(params: &EllipseParams, props: &ModeProps<'_>) -> Vec<Position> {
        let semi_major_km = DistanceUnit::Kilometers.from_meters(params.semi_major_m());
        let steps = adaptive_steps(semi_major_km, &props.config.tessellation);
        // Even vertex counts keep every vertex paired with its antipode.
        ellipse_polygon(
            params.center,
            params.semi_major_m(),
            params.semi_minor_m(),
            params.angle,
            steps + steps % 2,
        )
    }
}

impl InteractionMode for DrawEllipseMode {
    fn name(&self) -> &'static str {
        "draw-ellipse"
    }

    fn handle_click(&mut self, event: &ClickEvent, props: &mut ModeProps<'_>) {
        match (self.clicks.get(0), self.clicks.get(1)) {
            (None, _) => {
                self.clicks.push(event.map_coords);
                emit_tentative(props, event.map_coords, 1);
            }
            (Some(first), None) => {
                if first.approx_eq(&event.map_coords) {
                    tracing::debug!("ellipse axis ignored: zero length");
                    return;
                }
                self.clicks.push(event.map_coords);
                emit_tentative(props, event.map_coords, 2);
            }
            (Some(first), Some(second)) => {
                let Some(params) =
                    ellipse_from_clicks(first, second, event.map_coords, props.config.distance_unit)
                else {
                    return;
                };
                if params.semi_minor <= 0.0 {
                    tracing::debug!("ellipse ignored: zero minor axis");
                    return;
                }
                let ring = Self::ring(&params, props);
                self.cancel();
                emit_feature(props, Geometry::Polygon(vec![ring]), ShapeType::Ellipse);
            }
        }
    }

    fn handle_pointer_move(&mut self, event: &PointerMoveEvent, props: &mut ModeProps<'_>) {
        let pointer = event.map_coords;
        match (self.clicks.get(0), self.clicks.get(1)) {
            (None, _) => {}
            (Some(first), None) => {
                self.tooltip = Some(segment_tooltip(first, pointer, props));
                self.tentative = Some(Geometry::LineString(vec![first, pointer]));
            }
            (Some(first), Some(second)) => {
                let params =
                    ellipse_from_clicks(first, second, pointer, props.config.distance_unit);
                self.tooltip =
                    params.map(|p| Tooltip::new(pointer, ellipse_text(&p, props.config)));
                self.tentative = params
                    .filter(|p| p.semi_minor > 0.0)
                    .map(|p| Geometry::Polygon(vec![Self::ring(&p, props)]));
            }
        }
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

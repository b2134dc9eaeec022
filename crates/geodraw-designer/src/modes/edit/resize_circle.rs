use geodraw_core::DistanceUnit;

use crate::geodesy::{
    adaptive_steps, circle_params, circle_polygon, distance_m, translate_geometry, RadiusMode,
};
use crate::model::{Geometry, Position, ShapeType};
use crate::modes::events::{
    DragEvent, EditContext, EditType, HandleType, Pick, PickTarget, PointerMoveEvent, Tooltip,
};
use crate::modes::tooltip::diameter_text;
use crate::modes::{InteractionMode, ModeProps};

use super::{editable_feature, geometry_picks, picked_handle, vertex_guides, Guide};

/// Which behaviour the current drag drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSubMode {
    None,
    Resize,
    Translate,
}

#[derive(Debug, Clone)]
enum CircleDrag {
    Resize {
        feature_index: usize,
        center: Position,
    },
    Translate {
        feature_index: usize,
        origin: Position,
        snapshot: Geometry,
    },
}

/// Resize and translate for circles.
///
/// The sub-mode is picked once at drag start: an edge handle resizes about
/// the center, the circle body translates. It holds until drag stop.
#[derive(Debug, Default)]
pub struct ResizeCircleMode {
    hovered: Vec<Pick>,
    drag: Option<CircleDrag>,
    tooltip: Option<Tooltip>,
}

impl ResizeCircleMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_sub_mode(&self) -> ActiveSubMode {
        match self.drag {
            None => ActiveSubMode::None,
            Some(CircleDrag::Resize { .. }) => ActiveSubMode::Resize,
            Some(CircleDrag::Translate { .. }) => ActiveSubMode::Translate,
        }
    }

    fn begin(&self, event: &DragEvent, props: &ModeProps<'_>) -> Option<CircleDrag> {
        let picks = geometry_picks(&event.picks);

        if let Some(handle) =
            picked_handle(&picks, &[HandleType::Existing, HandleType::Intermediate])
        {
            let feature = editable_feature(props.data, handle.feature_index)?;
            if feature.shape_type() != ShapeType::Circle {
                return None;
            }
            // Radius comes from the pointer, only the center is needed.
            let params = circle_params(
                feature.geometry.outer_ring()?,
                RadiusMode::Fast,
                props.config.distance_unit,
            )?;
            return Some(CircleDrag::Resize {
                feature_index: handle.feature_index,
                center: params.center,
            });
        }

        let feature_index = picks.iter().find_map(|p| match p.target {
            Some(PickTarget::Feature { feature_index }) => Some(feature_index),
            _ => None,
        })?;
        let feature = editable_feature(props.data, feature_index)?;
        Some(CircleDrag::Translate {
            feature_index,
            origin: event.map_coords,
            snapshot: feature.geometry.clone(),
        })
    }

    fn update(&mut self, event: &DragEvent, finished: bool, props: &mut ModeProps<'_>) {
        let pointer = event.map_coords;
        let (feature_index, geometry, edit_type) = match &self.drag {
            None => return,
            Some(CircleDrag::Resize {
                feature_index,
                center,
            }) => {
                let radius_m = distance_m(*center, pointer);
                if !(radius_m.is_finite() && radius_m > 0.0) {
                    return;
                }
                let radius_km = DistanceUnit::Kilometers.from_meters(radius_m);
                let steps = adaptive_steps(radius_km, &props.config.tessellation);
                let radius = props.config.distance_unit.from_meters(radius_m);
                self.tooltip = Some(Tooltip::new(pointer, diameter_text(radius, props.config)));
                let edit_type = if finished { EditType::FinishScaling } else { EditType::Scaling };
                (
                    *feature_index,
                    Geometry::Polygon(vec![circle_polygon(*center, radius_m, steps)]),
                    edit_type,
                )
            }
            Some(CircleDrag::Translate {
                feature_index,
                origin,
                snapshot,
            }) => {
                let edit_type = if finished {
                    EditType::FinishTranslating
                } else {
                    EditType::Translating
                };
                (
                    *feature_index,
                    translate_geometry(snapshot, *origin, pointer),
                    edit_type,
                )
            }
        };

        let updated = props.data.with_geometry(feature_index, geometry);
        props.emit(
            updated,
            edit_type,
            EditContext {
                feature_indexes: vec![feature_index],
                position: Some(pointer),
                ..Default::default()
            },
        );
    }
}

impl InteractionMode for ResizeCircleMode {
    fn name(&self) -> &'static str {
        "resize-circle"
    }

    fn handle_pointer_move(&mut self, event: &PointerMoveEvent, _props: &mut ModeProps<'_>) {
        self.hovered = geometry_picks(&event.picks);
    }

    fn handle_drag_start(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        self.tooltip = None;
        self.drag = self.begin(event, props);
        tracing::debug!("circle drag started: {:?}", self.active_sub_mode());
    }

    fn handle_dragging(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        self.update(event, false, props);
    }

    fn handle_drag_stop(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        self.update(event, true, props);
        if self.drag.take().is_some() {
            tracing::debug!("circle drag finished");
        }
        self.tooltip = None;
    }

    fn cancel(&mut self) {
        self.drag = None;
        self.tooltip = None;
    }

    fn tooltips(&self) -> Vec<Tooltip> {
        self.tooltip.iter().cloned().collect()
    }

    fn guides(&self, props: &ModeProps<'_>) -> Vec<Guide> {
        vertex_guides(props.data, props.selected_indexes, &self.hovered)
    }
}

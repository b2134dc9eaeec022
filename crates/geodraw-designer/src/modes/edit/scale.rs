use crate::geodesy::{ellipse_axes, rectangle_dimensions, scale_geometry};
use crate::model::{Geometry, Position, ShapeType};
use crate::modes::events::{
    DragEvent, EditContext, EditType, HandleType, Pick, PointerMoveEvent, Tooltip,
};
use crate::modes::tooltip::{ellipse_text, rectangle_text};
use crate::modes::{InteractionMode, ModeProps};

use super::{editable_feature, geometry_picks, picked_handle, scale_guides, Guide};

/// Smallest scale factor applied; below this the shape would collapse.
const MIN_SCALE: f64 = 1e-6;

#[derive(Debug, Clone)]
struct ScaleDrag {
    feature_index: usize,
    corner: usize,
    shape_type: ShapeType,
    /// Bounding-box corner opposite the dragged one.
    origin: Position,
    start: Position,
    snapshot: Geometry,
}

/// Non-uniform scaling by dragging a bounding-box corner.
#[derive(Debug, Default)]
pub struct ScaleMode {
    hovered: Vec<Pick>,
    drag: Option<ScaleDrag>,
    tooltip: Option<Tooltip>,
}

fn factor(pointer: f64, origin: f64, start: f64) -> f64 {
    let span = start - origin;
    if span.abs() < f64::EPSILON {
        1.0
    } else {
        (pointer - origin) / span
    }
}

impl ScaleMode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles report width and height, anything else is measured as an ellipse.
    fn measure(
        geometry: &Geometry,
        shape_type: ShapeType,
        pointer: Position,
        props: &ModeProps<'_>,
    ) -> Option<Tooltip> {
        let ring = geometry.outer_ring()?;
        let unit = props.config.distance_unit;
        let text = if shape_type == ShapeType::Rectangle {
            rectangle_text(&rectangle_dimensions(ring, unit)?, props.config)
        } else {
            ellipse_text(&ellipse_axes(ring, unit)?, props.config)
        };
        Some(Tooltip::new(pointer, text))
    }

    fn update(&mut self, event: &DragEvent, edit_type: EditType, props: &mut ModeProps<'_>) {
        let Some(drag) = &self.drag else {
            return;
        };
        let pointer = event.map_coords;
        let scale_lon = factor(pointer.lon, drag.origin.lon, drag.start.lon);
        let scale_lat = factor(pointer.lat, drag.origin.lat, drag.start.lat);
        if scale_lon.abs() < MIN_SCALE || scale_lat.abs() < MIN_SCALE {
            tracing::trace!("scale tick ignored: degenerate factor");
            return;
        }

        let geometry = scale_geometry(&drag.snapshot, drag.origin, scale_lon, scale_lat);
        let tooltip = Self::measure(&geometry, drag.shape_type, pointer, props);
        let feature_index = drag.feature_index;
        let corner = drag.corner;
        self.tooltip = tooltip;

        let updated = props.data.with_geometry(feature_index, geometry);
        props.emit(
            updated,
            edit_type,
            EditContext {
                feature_indexes: vec![feature_index],
                position_indexes: vec![corner],
                position: Some(pointer),
            },
        );
    }
}

impl InteractionMode for ScaleMode {
    fn name(&self) -> &'static str {
        "scale"
    }

    fn handle_pointer_move(&mut self, event: &PointerMoveEvent, _props: &mut ModeProps<'_>) {
        self.hovered = geometry_picks(&event.picks);
    }

    fn handle_drag_start(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        self.drag = None;
        self.tooltip = None;

        let picks = geometry_picks(&event.picks);
        let Some(handle) = picked_handle(&picks, &[HandleType::Scale]) else {
            return;
        };
        let Some(feature) = editable_feature(props.data, handle.feature_index) else {
            return;
        };
        let corner = match handle.position_indexes.as_slice() {
            [c] if *c < 4 => *c,
            _ => return,
        };
        if !matches!(feature.geometry, Geometry::Polygon(_)) {
            return;
        }
        let Some(bbox) = feature.geometry.bounding_box() else {
            return;
        };
        let corners = bbox.corners();

        tracing::debug!("scale drag started on feature {} corner {}", handle.feature_index, corner);
        self.drag = Some(ScaleDrag {
            feature_index: handle.feature_index,
            corner,
            shape_type: feature.shape_type(),
            origin: corners[(corner + 2) % 4],
            start: corners[corner],
            snapshot: feature.geometry.clone(),
        });
    }

    fn handle_dragging(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        self.update(event, EditType::Scaling, props);
    }

    fn handle_drag_stop(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        self.update(event, EditType::FinishScaling, props);
        self.drag = None;
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
        scale_guides(props.data, props.selected_indexes, &self.hovered)
    }
}

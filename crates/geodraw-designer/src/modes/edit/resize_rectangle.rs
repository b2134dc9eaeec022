use crate::geodesy::circle::open_vertices;
use crate::geodesy::{rectangle_dimensions, rectangle_ring, resize_corner, square_corner};
use crate::model::{Geometry, Position, ShapeType};
use crate::modes::events::{
    DragEvent, EditContext, EditType, HandleType, Pick, PointerMoveEvent, Tooltip,
};
use crate::modes::tooltip::rectangle_text;
use crate::modes::{InteractionMode, ModeProps};

use super::{editable_feature, geometry_picks, picked_handle, vertex_guides, Guide, ModifyMode};

#[derive(Debug, Clone)]
struct CornerDrag {
    feature_index: usize,
    corner_index: usize,
    /// Corner opposite the dragged one; it never moves during the drag.
    anchor: Position,
    /// Outer ring at drag start.
    snapshot: Vec<Position>,
}

/// Corner resizing that keeps rectangles rectangular.
///
/// With the constrain modifier held the dragged corner is projected so the
/// rectangle is a square on the ground, and the ring is rewritten starting
/// at the anchor. Without it the neighbouring corners follow the dragged
/// one and a width/height/area tooltip is shown. Features that are not
/// rectangles fall back to free vertex editing.
#[derive(Debug, Default)]
pub struct ResizeRectangleMode {
    fallback: ModifyMode,
    hovered: Vec<Pick>,
    drag: Option<CornerDrag>,
    tooltip: Option<Tooltip>,
}

impl ResizeRectangleMode {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed corner of the drag in progress.
    pub fn anchor(&self) -> Option<Position> {
        self.drag.as_ref().map(|d| d.anchor)
    }

    fn resize(&mut self, event: &DragEvent, edit_type: EditType, props: &mut ModeProps<'_>) {
        let Some(drag) = &self.drag else {
            return;
        };
        let pointer = event.map_coords;

        // The constrained ring starts at the anchor, putting the dragged corner at index 2.
        let (ring, corner_index) = if event.modifiers.constrain {
            self.tooltip = None;
            (rectangle_ring(drag.anchor, square_corner(drag.anchor, pointer)), 2)
        } else {
            let Some(ring) = resize_corner(&drag.snapshot, drag.corner_index, pointer) else {
                return;
            };
            self.tooltip = rectangle_dimensions(&ring, props.config.distance_unit)
                .map(|dims| Tooltip::new(pointer, rectangle_text(&dims, props.config)));
            (ring, drag.corner_index)
        };

        let data = props.data;
        let Some(feature) = data.get(drag.feature_index) else {
            return;
        };
        let mut geometry = feature.geometry.clone();
        if let Some(outer) = geometry.outer_ring_mut() {
            *outer = ring;
        }
        let updated = data.with_geometry(drag.feature_index, geometry);
        props.emit(
            updated,
            edit_type,
            EditContext {
                feature_indexes: vec![drag.feature_index],
                position_indexes: vec![0, corner_index],
                position: Some(pointer),
            },
        );
    }
}

impl InteractionMode for ResizeRectangleMode {
    fn name(&self) -> &'static str {
        "resize-rectangle"
    }

    fn handle_pointer_move(&mut self, event: &PointerMoveEvent, props: &mut ModeProps<'_>) {
        self.hovered = geometry_picks(&event.picks);
        self.fallback.handle_pointer_move(event, props);
    }

    fn handle_drag_start(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        self.drag = None;
        self.tooltip = None;

        let picks = geometry_picks(&event.picks);
        let Some(handle) = picked_handle(&picks, &[HandleType::Existing, HandleType::Intermediate])
        else {
            return;
        };
        let Some(feature) = editable_feature(props.data, handle.feature_index) else {
            return;
        };
        if feature.shape_type() != ShapeType::Rectangle {
            self.fallback.handle_drag_start(event, props);
            return;
        }

        let Geometry::Polygon(rings) = &feature.geometry else {
            return;
        };
        let snapshot = rings.first().cloned().unwrap_or_default();
        let corners = open_vertices(&snapshot);
        let corner_index = match (handle.handle_type, handle.position_indexes.as_slice()) {
            (HandleType::Existing, [0, i]) if corners.len() == 4 && *i <= 4 => *i % 4,
            _ => {
                tracing::debug!("rectangle drag ignored: not a corner handle");
                return;
            }
        };

        let anchor = corners[(corner_index + 2) % 4];
        tracing::debug!(
            "rectangle corner {} drag started on feature {}, anchor {}",
            corner_index,
            handle.feature_index,
            anchor
        );
        self.drag = Some(CornerDrag {
            feature_index: handle.feature_index,
            corner_index,
            anchor,
            snapshot,
        });
    }

    fn handle_dragging(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        if self.fallback.is_dragging() {
            self.fallback.handle_dragging(event, props);
        } else {
            self.resize(event, EditType::MovePosition, props);
        }
    }

    fn handle_drag_stop(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        if self.fallback.is_dragging() {
            self.fallback.handle_drag_stop(event, props);
        } else {
            self.resize(event, EditType::FinishMovePosition, props);
        }
        self.drag = None;
        self.tooltip = None;
    }

    fn cancel(&mut self) {
        self.fallback.cancel();
        self.drag = None;
        self.tooltip = None;
    }

    fn tooltips(&self) -> Vec<Tooltip> {
        self.tooltip.iter().cloned().collect()
    }

    fn guides(&self, props: &ModeProps<'_>) -> Vec<Guide> {
        vertex_guides(props.data, props.selected_indexes, &self.hovered)
            .into_iter()
            .filter(|g| {
                let is_rectangle = props
                    .data
                    .get(g.handle.feature_index)
                    .is_some_and(|f| f.shape_type() == ShapeType::Rectangle);
                !(is_rectangle && g.handle.handle_type == HandleType::Intermediate)
            })
            .collect()
    }
}

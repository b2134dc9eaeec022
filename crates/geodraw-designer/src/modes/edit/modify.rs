use crate::model::Position;
use crate::modes::events::{DragEvent, EditContext, EditType, HandleType, Pick, PointerMoveEvent};
use crate::modes::{InteractionMode, ModeProps};

use super::{editable_feature, geometry_picks, picked_handle, vertex_guides, Guide};

#[derive(Debug, Clone)]
struct VertexDrag {
    feature_index: usize,
    position_indexes: Vec<usize>,
}

/// Free vertex editing: a dragged vertex follows the pointer. Dragging an
/// edge midpoint inserts a new vertex there first.
#[derive(Debug, Default)]
pub struct ModifyMode {
    hovered: Vec<Pick>,
    drag: Option<VertexDrag>,
}

impl ModifyMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn move_vertex(&self, position: Position, edit_type: EditType, props: &mut ModeProps<'_>) {
        let Some(drag) = &self.drag else {
            return;
        };
        let data = props.data;
        let Some(feature) = data.get(drag.feature_index) else {
            return;
        };
        let mut geometry = feature.geometry.clone();
        if !geometry.set_position(&drag.position_indexes, position) {
            return;
        }
        let updated = data.with_geometry(drag.feature_index, geometry);
        props.emit(
            updated,
            edit_type,
            EditContext {
                feature_indexes: vec![drag.feature_index],
                position_indexes: drag.position_indexes.clone(),
                position: Some(position),
            },
        );
    }
}

impl InteractionMode for ModifyMode {
    fn name(&self) -> &'static str {
        "modify"
    }

    fn handle_pointer_move(&mut self, event: &PointerMoveEvent, _props: &mut ModeProps<'_>) {
        self.hovered = geometry_picks(&event.picks);
    }

    fn handle_drag_start(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        let picks = geometry_picks(&event.picks);
        let Some(handle) = picked_handle(&picks, &[HandleType::Existing, HandleType::Intermediate])
        else {
            return;
        };
        let Some(feature) = editable_feature(props.data, handle.feature_index) else {
            return;
        };

        if handle.handle_type == HandleType::Intermediate {
            let mut geometry = feature.geometry.clone();
            if !geometry.insert_position(&handle.position_indexes, event.map_coords) {
                return;
            }
            let updated = props.data.with_geometry(handle.feature_index, geometry);
            props.emit(
                updated,
                EditType::AddPosition,
                EditContext {
                    feature_indexes: vec![handle.feature_index],
                    position_indexes: handle.position_indexes.clone(),
                    position: Some(event.map_coords),
                },
            );
        }

        tracing::debug!(
            "vertex drag started on feature {} at {:?}",
            handle.feature_index,
            handle.position_indexes
        );
        self.drag = Some(VertexDrag {
            feature_index: handle.feature_index,
            position_indexes: handle.position_indexes.clone(),
        });
    }

    fn handle_dragging(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        self.move_vertex(event.map_coords, EditType::MovePosition, props);
    }

    fn handle_drag_stop(&mut self, event: &DragEvent, props: &mut ModeProps<'_>) {
        self.move_vertex(event.map_coords, EditType::FinishMovePosition, props);
        if self.drag.take().is_some() {
            tracing::debug!("vertex drag finished");
        }
    }

    fn cancel(&mut self) {
        self.drag = None;
    }

    fn guides(&self, props: &ModeProps<'_>) -> Vec<Guide> {
        vertex_guides(props.data, props.selected_indexes, &self.hovered)
    }
}

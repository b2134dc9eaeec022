//! Interaction modes.
//!
//! Every drawing and editing behaviour is a state machine implementing
//! [`InteractionMode`]. The host feeds it pointer, drag and key events
//! together with [`ModeProps`], and the mode reports changes through the
//! `on_edit` callback carried in those props. Modes never fail: events they
//! cannot act on are ignored.
//!
//! ```text
//! host event ──> ModeRegistry::get(kind) ──> InteractionMode::handle_*()
//!                                                 │
//!                     EditAction <── on_edit ─────┘
//! ```

pub mod draw;
pub mod edit;
pub mod events;
pub mod registry;
pub mod tooltip;

use geodraw_settings::ModeConfig;

use crate::model::{FeatureCollection, Geometry};

pub use draw::{
    ClickSequence, DrawCircleMode, DrawEllipseMode, DrawLineStringMode, DrawPointMode,
    DrawPolygonMode, DrawRectangleMode, DrawState, ViewMode,
};
pub use edit::{Guide, ModifyMode, ResizeCircleMode, ResizeRectangleMode, ScaleMode};
pub use events::{
    ClickEvent, DragEvent, EditAction, EditContext, EditHandle, EditType, HandleType, Key,
    Modifiers, Pick, PickTarget, PointerMoveEvent, ScreenPoint, Tooltip,
};
pub use registry::{ModeHandle, ModeKind, ModeRegistry};

/// Everything a mode may read while handling an event, plus the edit sink.
pub struct ModeProps<'a> {
    pub data: &'a FeatureCollection,
    pub selected_indexes: &'a [usize],
    pub config: &'a ModeConfig,
    on_edit: &'a mut dyn FnMut(EditAction),
}

impl<'a> ModeProps<'a> {
    pub fn new(
        data: &'a FeatureCollection,
        selected_indexes: &'a [usize],
        config: &'a ModeConfig,
        on_edit: &'a mut dyn FnMut(EditAction),
    ) -> Self {
        Self {
            data,
            selected_indexes,
            config,
            on_edit,
        }
    }

    /// Report an edit to the host.
    pub fn emit(&mut self, updated_data: FeatureCollection, edit_type: EditType, edit_context: EditContext) {
        tracing::trace!("edit emitted: {:?}", edit_type);
        (self.on_edit)(EditAction {
            updated_data,
            edit_type,
            edit_context,
        });
    }

    pub fn is_selected(&self, feature_index: usize) -> bool {
        self.selected_indexes.contains(&feature_index)
    }
}

/// A drawing or editing state machine.
///
/// Every handler defaults to doing nothing so modes only implement the
/// events they react to.
pub trait InteractionMode {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn handle_click(&mut self, _event: &ClickEvent, _props: &mut ModeProps<'_>) {}

    fn handle_pointer_move(&mut self, _event: &PointerMoveEvent, _props: &mut ModeProps<'_>) {}

    fn handle_drag_start(&mut self, _event: &DragEvent, _props: &mut ModeProps<'_>) {}

    fn handle_dragging(&mut self, _event: &DragEvent, _props: &mut ModeProps<'_>) {}

    fn handle_drag_stop(&mut self, _event: &DragEvent, _props: &mut ModeProps<'_>) {}

    /// Escape cancels, Enter finishes.
    fn handle_key_up(&mut self, key: &Key, props: &mut ModeProps<'_>) {
        match key {
            Key::Escape => self.cancel(),
            Key::Enter => self.finish(props),
            Key::Other(_) => {}
        }
    }

    /// Complete a multi-vertex draw. Hosts call this on double-click.
    fn finish(&mut self, _props: &mut ModeProps<'_>) {}

    /// Drop any in-progress interaction.
    fn cancel(&mut self) {}

    /// Zero or one tooltip for the current pointer position.
    fn tooltips(&self) -> Vec<Tooltip> {
        Vec::new()
    }

    /// Preview of the geometry being drawn.
    fn tentative(&self) -> Option<Geometry> {
        None
    }

    /// Edit handles to render for the selected features.
    fn guides(&self, _props: &ModeProps<'_>) -> Vec<Guide> {
        Vec::new()
    }
}

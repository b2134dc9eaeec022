use crate::model::{Geometry, ShapeType};
use crate::modes::events::ClickEvent;
use crate::modes::{InteractionMode, ModeProps};

use super::emit_feature;

/// Completes on the first click.
#[derive(Debug, Default)]
pub struct DrawPointMode;

impl DrawPointMode {
    pub fn new() -> Self {
        Self
    }
}

impl InteractionMode for DrawPointMode {
    fn name(&self) -> &'static str {
        "draw-point"
    }

    fn handle_click(&mut self, event: &ClickEvent, props: &mut ModeProps<'_>) {
        emit_feature(props, Geometry::Point(event.map_coords), ShapeType::Point);
    }
}

//! Designer state manager for host integration.
//!
//! Owns the mode registry, the working feature collection and the
//! selection, and routes host events to the active mode. Edits emitted by
//! the mode are applied to the working collection before being returned.

use std::fmt;

use geodraw_core::LocalCallback;
use geodraw_settings::Config;

use crate::lifecycle::{create_temporary_shape, update_geometry, ShapeOptions, TemporaryShape};
use crate::model::{FeatureCollection, Geometry, Shape};
use crate::modes::{
    ClickEvent, DragEvent, EditAction, EditType, Guide, InteractionMode, Key, ModeHandle,
    ModeKind, ModeProps, ModeRegistry, PointerMoveEvent, Tooltip,
};

/// Designer state for host integration
pub struct DesignerState {
    registry: ModeRegistry,
    config: Config,
    active: ModeKind,
    data: FeatureCollection,
    selected: Vec<usize>,
    listener: Option<LocalCallback<EditAction>>,
}

impl DesignerState {
    pub fn new(config: Config) -> Self {
        Self {
            registry: ModeRegistry::new(),
            config,
            active: ModeKind::View,
            data: FeatureCollection::new(),
            selected: Vec::new(),
            listener: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration. Any interaction in progress is dropped.
    pub fn set_config(&mut self, config: Config) {
        self.registry.cancel_all();
        self.config = config;
    }

    pub fn data(&self) -> &FeatureCollection {
        &self.data
    }

    pub fn set_data(&mut self, data: FeatureCollection) {
        self.data = data;
        self.selected.retain(|&i| i < self.data.len());
    }

    /// Load persisted shapes as the working collection.
    pub fn load_shapes(&mut self, shapes: &[Shape]) {
        self.data = shapes.iter().map(Shape::to_feature).collect();
        self.selected.clear();
        tracing::debug!("loaded {} shapes", shapes.len());
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Select features by index; out-of-range indexes are dropped.
    pub fn select(&mut self, indexes: &[usize]) {
        self.selected = indexes
            .iter()
            .copied()
            .filter(|&i| i < self.data.len())
            .collect();
        self.selected.dedup();
    }

    pub fn active_mode(&self) -> ModeKind {
        self.active
    }

    /// Switch modes, cancelling whatever the previous mode was doing.
    pub fn set_mode(&mut self, kind: ModeKind) {
        if kind == self.active {
            return;
        }
        self.registry.get(self.active).borrow_mut().cancel();
        tracing::info!("mode changed: {} -> {}", self.active, kind);
        self.active = kind;
    }

    /// The long-lived handle of the active mode.
    pub fn active_handle(&mut self) -> ModeHandle {
        self.registry.get(self.active)
    }

    pub fn registry(&mut self) -> &mut ModeRegistry {
        &mut self.registry
    }

    /// Register a callback invoked with every applied edit.
    pub fn on_edit(&mut self, callback: LocalCallback<EditAction>) {
        self.listener = Some(callback);
    }

    pub fn click(&mut self, event: &ClickEvent) -> Vec<EditAction> {
        self.dispatch(|mode, props| mode.handle_click(event, props))
    }

    pub fn pointer_move(&mut self, event: &PointerMoveEvent) -> Vec<EditAction> {
        self.dispatch(|mode, props| mode.handle_pointer_move(event, props))
    }

    pub fn drag_start(&mut self, event: &DragEvent) -> Vec<EditAction> {
        self.dispatch(|mode, props| mode.handle_drag_start(event, props))
    }

    pub fn dragging(&mut self, event: &DragEvent) -> Vec<EditAction> {
        self.dispatch(|mode, props| mode.handle_dragging(event, props))
    }

    pub fn drag_stop(&mut self, event: &DragEvent) -> Vec<EditAction> {
        self.dispatch(|mode, props| mode.handle_drag_stop(event, props))
    }

    pub fn key_up(&mut self, key: &Key) -> Vec<EditAction> {
        self.dispatch(|mode, props| mode.handle_key_up(key, props))
    }

    /// Double-click entry point.
    pub fn finish(&mut self) -> Vec<EditAction> {
        self.dispatch(|mode, props| mode.finish(props))
    }

    pub fn cancel(&mut self) {
        self.registry.get(self.active).borrow_mut().cancel();
    }

    pub fn tooltips(&mut self) -> Vec<Tooltip> {
        self.active_handle().borrow().tooltips()
    }

    pub fn tentative(&mut self) -> Option<Geometry> {
        self.active_handle().borrow().tentative()
    }

    pub fn guides(&mut self) -> Vec<Guide> {
        let handle = self.registry.get(self.active);
        let mut ignore = |_: EditAction| {};
        let props = ModeProps::new(&self.data, &self.selected, &self.config.mode, &mut ignore);
        let guides = handle.borrow().guides(&props);
        guides
    }

    /// Temporary shape for a completed draw.
    ///
    /// The shape type comes from the flag the draw mode set on the feature,
    /// so the conversion still works after the host has switched modes.
    pub fn temporary_shape(&self, action: &EditAction, options: &ShapeOptions) -> Option<TemporaryShape> {
        if action.edit_type != EditType::AddFeature {
            return None;
        }
        let index = *action.edit_context.feature_indexes.first()?;
        let feature = action.updated_data.get(index)?;
        let mode = feature
            .properties
            .shape
            .map(ModeKind::draw_for)
            .unwrap_or(self.active);
        Some(create_temporary_shape(
            feature.geometry.clone(),
            mode,
            options,
            &self.config,
        ))
    }

    /// `shape` with the geometry currently held at `feature_index`.
    pub fn updated_shape(&self, shape: &Shape, feature_index: usize) -> Option<Shape> {
        let feature = self.data.get(feature_index)?;
        Some(update_geometry(
            shape,
            feature.geometry.clone(),
            self.config.mode.distance_unit,
        ))
    }

    fn dispatch(
        &mut self,
        f: impl FnOnce(&mut dyn InteractionMode, &mut ModeProps<'_>),
    ) -> Vec<EditAction> {
        let handle = self.registry.get(self.active);
        let mut actions = Vec::new();
        {
            let mut sink = |action: EditAction| actions.push(action);
            let mut props = ModeProps::new(&self.data, &self.selected, &self.config.mode, &mut sink);
            let mut mode = handle.borrow_mut();
            f(&mut *mode, &mut props);
        }

        if let Some(last) = actions.last() {
            self.data = last.updated_data.clone();
            self.selected.retain(|&i| i < self.data.len());
        }
        if let Some(listener) = self.listener.as_mut() {
            for action in &actions {
                listener(action.clone());
            }
        }
        actions
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignerState")
            .field("active", &self.active)
            .field("features", &self.data.len())
            .field("selected", &self.selected)
            .field("registry", &self.registry)
            .finish()
    }
}

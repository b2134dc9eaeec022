//! # Geodraw
//!
//! Interactive drawing and editing of shapes on a geographic map:
//! - Point, line, polygon, rectangle, circle and ellipse draw modes
//! - Vertex editing, square-constrained rectangle resize, circle
//!   resize/translate and bounding-box scaling
//! - Geodesic measurement with live dimension tooltips
//! - Shape validation and the drawn-feature to saved-shape lifecycle
//!
//! ## Architecture
//!
//! Geodraw is organized as a workspace with multiple crates:
//!
//! 1. **geodraw-core** - Error taxonomy, distance units, shared-handle aliases
//! 2. **geodraw-settings** - Mode configuration, style defaults, file persistence
//! 3. **geodraw-designer** - Geodesy, validation, interaction modes, registry, lifecycle
//! 4. **geodraw** - This facade: re-exports and logging setup
//!
//! The crate has no rendering of its own. A host map widget forwards
//! pointer events to [`DesignerState`] and draws the returned geometry,
//! tooltips and guides.

use std::path::Path;

use anyhow::Context;

pub use geodraw_core::{format_area, format_distance, DistanceUnit, Error, Result};
pub use geodraw_designer as designer;
pub use geodraw_designer::{
    clone_shape, commit, create_temporary_shape, update_geometry, validate_feature,
    validate_geometry, validate_shape, ClickEvent, DesignerState, DragEvent, EditAction,
    EditType, Feature, FeatureCollection, Geometry, Key, ModeKind, ModeRegistry, Modifiers,
    Pick, PointerMoveEvent, Position, Shape, ShapeOptions, ShapeType, TemporaryShape, Tooltip,
    ValidationResult,
};
pub use geodraw_settings::{Config, ModeConfig, StyleSettings, TessellationSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Calling it again once a subscriber is installed returns an error
/// instead of panicking.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;
    Ok(())
}

/// Initialize logging as one JSON object per line, for hosts that ship
/// logs to a collector.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_current_span(false))
        .try_init()
        .context("a global tracing subscriber is already installed")?;
    Ok(())
}

/// Build a designer from the configuration file at `path`, or from
/// defaults when the file does not exist.
pub fn designer_from_config(path: &Path) -> anyhow::Result<DesignerState> {
    let config = Config::load_or_default(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::info!(
        "designer ready: unit {}, {} decimals",
        config.mode.distance_unit,
        config.mode.precision
    );
    Ok(DesignerState::new(config))
}

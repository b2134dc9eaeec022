//! Geodraw Settings Crate
//!
//! Handles the configuration consumed by the drawing and editing modes: the
//! distance unit and measurement precision, circle tessellation bounds, and
//! the default style applied to newly created shapes.

pub mod config;
pub mod error;

pub use config::{Config, LinePattern, ModeConfig, StyleSettings, TessellationSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

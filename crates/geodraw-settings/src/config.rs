//! Configuration and settings management for geodraw
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Mode settings (distance unit, measurement precision, tessellation)
//! - Style defaults applied to newly created shapes

pub use geodraw_core::units::DistanceUnit;
use geodraw_core::constants::{DEFAULT_COORDINATE_PRECISION, DEFAULT_MEASUREMENT_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Name of the per-user configuration file.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Stroke pattern for shape outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePattern {
    /// Continuous stroke
    Solid,
    /// Long dashes
    Dashed,
    /// Dots
    Dotted,
}

impl Default for LinePattern {
    fn default() -> Self {
        Self::Solid
    }
}

impl std::fmt::Display for LinePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dashed => write!(f, "dashed"),
            Self::Dotted => write!(f, "dotted"),
        }
    }
}

/// Bounds for the adaptive circle tessellation
///
/// Small circles use `min_steps` vertices, large circles `max_steps`; radii in
/// between are interpolated on a logarithmic scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationSettings {
    /// Vertex count used at and below `min_radius_km`
    pub min_steps: usize,
    /// Vertex count used at and above `max_radius_km`
    pub max_steps: usize,
    /// Radius below which `min_steps` applies, in kilometers
    pub min_radius_km: f64,
    /// Radius above which `max_steps` applies, in kilometers
    pub max_radius_km: f64,
}

impl Default for TessellationSettings {
    fn default() -> Self {
        Self {
            min_steps: 32,
            max_steps: 256,
            min_radius_km: 0.05,
            max_radius_km: 500.0,
        }
    }
}

/// Settings threaded through every drawing and editing mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    /// Unit used for tooltips and derived measurements
    pub distance_unit: DistanceUnit,
    /// Number of decimals shown in tooltips
    pub precision: usize,
    /// Number of decimals used when formatting coordinates
    pub coordinate_precision: usize,
    /// Circle tessellation bounds
    pub tessellation: TessellationSettings,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            distance_unit: DistanceUnit::default(),
            precision: DEFAULT_MEASUREMENT_PRECISION,
            coordinate_precision: DEFAULT_COORDINATE_PRECISION,
            tessellation: TessellationSettings::default(),
        }
    }
}

impl ModeConfig {
    /// Mode configuration using a specific distance unit.
    pub fn with_unit(distance_unit: DistanceUnit) -> Self {
        Self {
            distance_unit,
            ..Default::default()
        }
    }
}

/// Default style applied to newly created shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Fill color as a CSS color string
    pub fill_color: String,
    /// Outline color as a CSS color string
    pub line_color: String,
    /// Outline width in pixels
    pub line_width: f64,
    /// Outline pattern
    pub line_pattern: LinePattern,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            fill_color: "#3388ff33".to_string(),
            line_color: "#3388ff".to_string(),
            line_width: 2.0,
            line_pattern: LinePattern::Solid,
        }
    }
}

/// Complete configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Mode settings
    #[serde(default)]
    pub mode: ModeConfig,
    /// Default shape style
    #[serde(default)]
    pub style: StyleSettings,
}

impl Config {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform-specific location of the user configuration file
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("geodraw").join(CONFIG_FILE_NAME))
    }

    /// Load configuration from file (.json or .toml)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the user configuration, falling back to defaults when no file exists
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No configuration at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save configuration to file (.json or .toml)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
                })?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let t = &self.mode.tessellation;

        if t.min_steps < 3 {
            return Err(ConfigError::ValueOutOfRange {
                key: "mode.tessellation.min_steps".to_string(),
                value: t.min_steps.to_string(),
            });
        }

        if t.max_steps < t.min_steps {
            return Err(ConfigError::Inconsistent(format!(
                "max_steps ({}) is smaller than min_steps ({})",
                t.max_steps, t.min_steps
            )));
        }

        if !(t.min_radius_km.is_finite() && t.min_radius_km > 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "mode.tessellation.min_radius_km".to_string(),
                value: t.min_radius_km.to_string(),
            });
        }

        if !t.max_radius_km.is_finite() || t.max_radius_km <= t.min_radius_km {
            return Err(ConfigError::Inconsistent(format!(
                "max_radius_km ({}) must be greater than min_radius_km ({})",
                t.max_radius_km, t.min_radius_km
            )));
        }

        if self.mode.precision > 12 {
            return Err(ConfigError::ValueOutOfRange {
                key: "mode.precision".to_string(),
                value: self.mode.precision.to_string(),
            });
        }

        if self.mode.coordinate_precision > 12 {
            return Err(ConfigError::ValueOutOfRange {
                key: "mode.coordinate_precision".to_string(),
                value: self.mode.coordinate_precision.to_string(),
            });
        }

        if !(self.style.line_width.is_finite() && self.style.line_width > 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "style.line_width".to_string(),
                value: self.style.line_width.to_string(),
            });
        }

        Ok(())
    }
}

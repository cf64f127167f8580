//! Configuration and settings management for RouteCanvas
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Machine settings (machine kind, start-move lead-in)
//! - Plane settings (origin used to anchor the export route)
//! - Selection settings (click tolerance, rubber-band threshold, hit region)
//! - View flags (disabled paths, path direction, workpiece zero)

use routecanvas_core::{ConfigError, MachineKind, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "routecanvas";
const CONFIG_FILE: &str = "config.toml";

/// Machine preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    /// Machine kind; a drag knife disables cutter compensation
    pub kind: MachineKind,
    /// Lead-in distance of the compensation start move
    pub start_move_radius: f64,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            kind: MachineKind::Milling,
            start_move_radius: 1.0,
        }
    }
}

/// Plane coordinates where every export route starts and ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlaneSettings {
    /// First axis coordinate of the route start/end point
    pub axis1_start_end: f64,
    /// Second axis coordinate of the route start/end point
    pub axis2_start_end: f64,
}

/// How a shape's extent is tested against click and drag rectangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HitRegion {
    /// Axis-aligned bounding box of the path
    BoundingBox,
    /// The stroked outline only; clicking inside a closed contour misses it
    #[default]
    Outline,
}

/// Selection preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// Half size of the rectangle centered on a click
    pub click_tolerance: f64,
    /// Manhattan distance a press must travel before it becomes a rubber band
    pub drag_threshold: f64,
    /// Region tested against click and drag rectangles
    pub hit_region: HitRegion,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            click_tolerance: 2.0,
            drag_threshold: 3.0,
            hit_region: HitRegion::Outline,
        }
    }
}

/// View flags restored at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Draw disabled shapes dimmed instead of hiding them
    pub show_disabled: bool,
    /// Show direction arrows and start moves on every shape
    pub show_path_direction: bool,
    /// Show the workpiece zero marker
    pub show_wp_zero: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            show_disabled: false,
            show_path_direction: false,
            show_wp_zero: true,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Machine preferences
    #[serde(default)]
    pub machine: MachineSettings,
    /// Plane origin
    #[serde(default)]
    pub plane: PlaneSettings,
    /// Selection preferences
    #[serde(default)]
    pub selection: SelectionSettings,
    /// View flags
    #[serde(default)]
    pub view: ViewSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform specific location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            reason: e.to_string(),
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                format: "JSON".to_string(),
                reason: e.to_string(),
            })?,
            Format::Toml => toml::from_str(&content).map_err(|e| ConfigError::Parse {
                format: "TOML".to_string(),
                reason: e.to_string(),
            })?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self).map_err(|e| {
                ConfigError::Serialize {
                    reason: e.to_string(),
                }
            })?,
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
                reason: e.to_string(),
            })?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                reason: e.to_string(),
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.machine.start_move_radius >= 0.0) {
            return Err(
                ConfigError::invalid("machine.start_move_radius", "must be >= 0").into(),
            );
        }

        if !self.plane.axis1_start_end.is_finite() || !self.plane.axis2_start_end.is_finite() {
            return Err(ConfigError::invalid("plane", "origin must be finite").into());
        }

        if !(self.selection.click_tolerance > 0.0) {
            return Err(
                ConfigError::invalid("selection.click_tolerance", "must be > 0").into(),
            );
        }

        if !(self.selection.drag_threshold >= 0.0) {
            return Err(
                ConfigError::invalid("selection.drag_threshold", "must be >= 0").into(),
            );
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> std::result::Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(ConfigError::UnsupportedFormat),
        }
    }
}

//! Configuration file handling for svgkit
//!
//! Configuration is organized into two sections:
//! - Layout settings (canvas size, origin corner, scale, origin offset)
//! - Output settings (target file name, length unit suffix)
//!
//! Files are JSON or TOML, chosen by extension.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use svgkit_core::{Dimensions, Layout, Origin, Point, Result, SvgError};
use svgkit_designer::{Document, DEFAULT_UNIT};

/// Layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Canvas width in user units
    pub width: f64,
    /// Canvas height in user units
    pub height: f64,
    /// Corner the user-space origin is anchored to
    pub origin: Origin,
    /// Uniform scale from user space to device space
    pub scale: f64,
    /// Origin offset along x
    pub offset_x: f64,
    /// Origin offset along y
    pub offset_y: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self::from(Layout::default())
    }
}

impl From<Layout> for LayoutSettings {
    fn from(layout: Layout) -> Self {
        Self {
            width: layout.dimensions.width,
            height: layout.dimensions.height,
            origin: layout.origin,
            scale: layout.scale,
            offset_x: layout.origin_offset.x,
            offset_y: layout.origin_offset.y,
        }
    }
}

impl LayoutSettings {
    pub fn to_layout(&self) -> Layout {
        Layout::new(
            Dimensions::new(self.width, self.height),
            self.origin,
            self.scale,
            Point::new(self.offset_x, self.offset_y),
        )
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// File the document is saved to
    pub file_name: PathBuf,
    /// Suffix appended to the root width/height
    pub unit: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from("output.svg"),
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

/// Complete svgkit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SvgError::config("Config file must be .json or .toml")),
        }
    }
}

impl Config {
    /// Default config location: `<config dir>/svgkit/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("svgkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SvgError::io(path, e))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)
                .map_err(|e| SvgError::config(format!("Invalid JSON config: {}", e)))?,
            ConfigFormat::Toml => toml::from_str(&content)
                .map_err(|e| SvgError::config(format!("Invalid TOML config: {}", e)))?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| SvgError::config(format!("Failed to serialize config: {}", e)))?,
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| SvgError::config(format!("Failed to serialize config: {}", e)))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SvgError::io(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| SvgError::io(path, e))?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if !(layout.scale.is_finite() && layout.scale > 0.0) {
            return Err(SvgError::config("Scale must be a positive number"));
        }

        if !(layout.width.is_finite() && layout.width > 0.0)
            || !(layout.height.is_finite() && layout.height > 0.0)
        {
            return Err(SvgError::config("Layout dimensions must be > 0"));
        }

        if !(layout.offset_x.is_finite() && layout.offset_y.is_finite()) {
            return Err(SvgError::config("Origin offset must be finite"));
        }

        if self.output.file_name.as_os_str().is_empty() {
            return Err(SvgError::config("Output file name must not be empty"));
        }

        Ok(())
    }

    /// Creates an empty document targeting the configured output.
    pub fn document(&self) -> Document {
        Document::new(self.output.file_name.clone(), self.layout.to_layout())
            .with_unit(self.output.unit.clone())
    }
}

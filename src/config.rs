/// Runtime configuration for the color meter
///
/// Every field has a default, so the meter works without any config file.
/// An optional JSON file in the platform config directory overrides them:
/// - Linux: ~/.config/hsv-meter/config.json
/// - macOS: ~/Library/Application Support/hsv-meter/config.json
/// - Windows: %APPDATA%\hsv-meter\config.json
///
/// A broken file is reported at startup and the defaults are used instead.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MeterError, Result};

/// Resampling filter used when shrinking the image for display
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// All tunable settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MeterConfig {
    /// Linear downscale divisor for the displayed image (2 = half size)
    pub downscale: u32,

    /// Filter used for downscaling
    pub filter: ResampleFilter,

    /// Window size before any image is opened (width, height)
    pub initial_window: (f32, f32),

    /// Window size once an image is shown (width, height)
    pub loaded_window: (f32, f32),

    /// Log filter directive, e.g. "info" or "hsv_meter=debug"
    pub log_level: String,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            downscale: 2,
            filter: ResampleFilter::Lanczos3,
            initial_window: (320.0, 120.0),
            loaded_window: (800.0, 800.0),
            log_level: "info".to_string(),
        }
    }
}

impl MeterConfig {
    /// Load the config file if present, defaults otherwise
    ///
    /// Runs before logging is set up, so problems are returned rather
    /// than logged. A missing file is not an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Where the config file is looked up
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("hsv-meter");
        path.push("config.json");
        Some(path)
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| MeterError::ConfigRead {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        Self::from_json(&json)
            .map(Self::validated)
            .map_err(|e| MeterError::ConfigParse {
                path: path.to_path_buf(),
                source: e.into(),
            })
    }

    /// Convert to JSON string
    #[cfg(test)]
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Clamp values that would make the loader misbehave
    pub fn validated(mut self) -> Self {
        self.downscale = self.downscale.max(1);
        self
    }
}

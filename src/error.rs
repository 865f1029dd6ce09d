/// Error types for the color meter
///
/// Errors travel inside iced messages, so every variant must be `Clone`.
/// Underlying library errors are therefore kept behind an `Arc`.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type alias for color meter operations
pub type Result<T> = std::result::Result<T, MeterError>;

/// Everything that can go wrong while loading an image or the config
#[derive(Error, Debug, Clone)]
pub enum MeterError {
    /// The file could not be opened or decoded as an image
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Arc<image::ImageError>,
    },

    /// Downscaling would produce an empty raster
    #[error("Image is too small to display: {width}x{height} scaled by 1/{divisor} is empty")]
    ImageTooSmall {
        width: u32,
        height: u32,
        divisor: u32,
    },

    /// The background load task panicked or was cancelled
    #[error("Background load task failed: {0}")]
    Worker(String),

    /// The config file exists but could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The config file is not valid JSON for `MeterConfig`
    #[error("Invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: Arc<serde_json::Error>,
    },
}

impl MeterError {
    /// Create a decode error for the given file
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Short text suitable for the status line
    pub fn user_message(&self) -> String {
        match self {
            MeterError::Decode { path, .. } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!("Could not open {} as an image.", name)
            }
            MeterError::ImageTooSmall { width, height, .. } => {
                format!("Image is too small ({}x{}).", width, height)
            }
            MeterError::Worker(_) => "Loading was interrupted. Please try again.".to_string(),
            MeterError::ConfigRead { .. } | MeterError::ConfigParse { .. } => {
                "Config file ignored, using defaults.".to_string()
            }
        }
    }
}

/// Image loader
///
/// Decodes a user-selected file, shrinks it for display and derives the
/// color/HSV buffers the pointer sampler reads from.

use iced::widget::image::Handle;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::{debug, info};

use super::rasters::Rasters;
use crate::config::MeterConfig;
use crate::error::{MeterError, Result};

/// A decoded image ready for display and sampling
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// File the image was read from
    pub path: PathBuf,
    /// Dimensions of the decoded file before downscaling
    pub source_size: (u32, u32),
    /// Color + HSV buffers of the Display Raster
    pub rasters: Rasters,
    /// Display Raster uploaded for rendering
    pub handle: Handle,
}

impl LoadedImage {
    /// Dimensions of the Display Raster
    pub fn display_size(&self) -> (u32, u32) {
        self.rasters.dimensions()
    }

    /// File name for status messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Load an image file off the UI thread
///
/// Decoding and resampling are CPU-bound, so they run on tokio's
/// blocking pool. The caller receives the result as a message.
pub async fn load_image(path: PathBuf, config: MeterConfig) -> Result<LoadedImage> {
    task::spawn_blocking(move || load_image_blocking(&path, &config))
        .await
        .map_err(|e| MeterError::Worker(e.to_string()))?
}

/// Blocking implementation of image loading
pub fn load_image_blocking(path: &Path, config: &MeterConfig) -> Result<LoadedImage> {
    debug!("Decoding {}", path.display());

    let decoded = image::open(path).map_err(|e| MeterError::decode(path, e))?;
    let loaded = prepare(decoded, path, config)?;

    let (sw, sh) = loaded.source_size;
    let (dw, dh) = loaded.display_size();
    info!("Loaded {}: {}x{} -> {}x{}", path.display(), sw, sh, dw, dh);

    Ok(loaded)
}

/// Turn a decoded image into display + sampling buffers
///
/// # Steps
/// 1. Shrink to 1/downscale of each dimension (integer division)
/// 2. Normalize to 8-bit RGB (alpha and extra precision are dropped)
/// 3. Derive the HSV buffer from the RGB buffer
/// 4. Upload the RGB buffer as an RGBA handle for rendering
pub fn prepare(image: DynamicImage, path: &Path, config: &MeterConfig) -> Result<LoadedImage> {
    let source_size = (image.width(), image.height());
    let (width, height) = display_dimensions(source_size, config.downscale)?;

    let resized = image.resize_exact(width, height, config.filter.into());
    let rasters = Rasters::from_color(resized.to_rgb8());

    let rgba = DynamicImage::ImageRgb8(rasters.color().clone()).into_rgba8();
    let handle = Handle::from_rgba(width, height, rgba.into_raw());

    Ok(LoadedImage {
        path: path.to_path_buf(),
        source_size,
        rasters,
        handle,
    })
}

/// Size of the Display Raster for a given source size
pub fn display_dimensions((width, height): (u32, u32), divisor: u32) -> Result<(u32, u32)> {
    let divisor = divisor.max(1);
    let scaled = (width / divisor, height / divisor);

    if scaled.0 == 0 || scaled.1 == 0 {
        return Err(MeterError::ImageTooSmall { width, height, divisor });
    }

    Ok(scaled)
}

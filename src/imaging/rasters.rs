/// Color and HSV buffers for the displayed image
///
/// The two buffers are always built together from the same RGB raster,
/// so they can never disagree on dimensions or go stale independently.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::color::rgb_to_hsv8;
use crate::state::readout::PixelReading;

/// 8-bit HSV raster stored in three byte channels (H, S, V)
pub type HsvImage = ImageBuffer<Rgb<u8>, Vec<u8>>;

/// Paired color + HSV buffers of the Display Raster
#[derive(Debug, Clone)]
pub struct Rasters {
    color: RgbImage,
    hsv: HsvImage,
}

impl Rasters {
    /// Derive the HSV buffer from an RGB buffer and keep both
    pub fn from_color(color: RgbImage) -> Self {
        let mut hsv = HsvImage::new(color.width(), color.height());
        for (src, dst) in color.pixels().zip(hsv.pixels_mut()) {
            *dst = Rgb(rgb_to_hsv8(src.0));
        }
        Self { color, hsv }
    }

    pub fn width(&self) -> u32 {
        self.color.width()
    }

    pub fn height(&self) -> u32 {
        self.color.height()
    }

    /// Dimensions shared by both buffers
    pub fn dimensions(&self) -> (u32, u32) {
        self.color.dimensions()
    }

    pub fn color(&self) -> &RgbImage {
        &self.color
    }

    #[cfg(test)]
    pub fn hsv(&self) -> &HsvImage {
        &self.hsv
    }

    /// Read (RGB, HSV) at an integer pixel index
    pub fn pixel(&self, x: u32, y: u32) -> Option<([u8; 3], [u8; 3])> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some((self.color.get_pixel(x, y).0, self.hsv.get_pixel(x, y).0))
    }

    /// Sample at a pointer position given in display-surface coordinates
    ///
    /// Fractional positions fall into the pixel that contains them.
    /// Negative, non-finite, or out-of-range positions yield `None`.
    pub fn sample(&self, x: f32, y: f32) -> Option<PixelReading> {
        let px = pointer_to_index(x)?;
        let py = pointer_to_index(y)?;
        let (rgb, hsv) = self.pixel(px, py)?;
        Some(PixelReading::new(px, py, rgb, hsv))
    }
}

/// Floor a pointer coordinate to a pixel index
fn pointer_to_index(coord: f32) -> Option<u32> {
    if !coord.is_finite() || coord < 0.0 {
        return None;
    }
    let floored = coord.floor();
    if floored > u32::MAX as f32 {
        return None;
    }
    Some(floored as u32)
}

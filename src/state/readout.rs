/// Pixel readout shown next to the image
///
/// One `PixelReading` is produced per sampled pointer position and
/// rendered as three text lines.

use crate::color::HsvDisplay;

/// Values read at one pixel of the Display Raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelReading {
    /// Pixel column
    pub x: u32,
    /// Pixel row
    pub y: u32,
    /// Color channels in (R, G, B) order
    pub rgb: [u8; 3],
    /// 8-bit HSV as stored: hue 0-179, saturation and value 0-255
    pub hsv_raw: [u8; 3],
    /// HSV in degrees and percent
    pub hsv: HsvDisplay,
}

impl PixelReading {
    pub fn new(x: u32, y: u32, rgb: [u8; 3], hsv_raw: [u8; 3]) -> Self {
        Self {
            x,
            y,
            rgb,
            hsv_raw,
            hsv: HsvDisplay::from_raw(hsv_raw),
        }
    }

    /// "RGB: (r, g, b)"
    pub fn rgb_label(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("RGB: ({}, {}, {})", r, g, b)
    }

    /// "OpenCV HSV: (h, s, v)", the 8-bit encoding as stored
    pub fn raw_hsv_label(&self) -> String {
        let [h, s, v] = self.hsv_raw;
        format!("OpenCV HSV: ({}, {}, {})", h, s, v)
    }

    /// "HSV: (deg, sat, val)" in degrees and percent
    pub fn hsv_label(&self) -> String {
        format!(
            "HSV: ({}, {}, {})",
            self.hsv.degrees, self.hsv.saturation, self.hsv.value
        )
    }

    /// All three lines in display order
    pub fn labels(&self) -> [String; 3] {
        [self.rgb_label(), self.raw_hsv_label(), self.hsv_label()]
    }
}

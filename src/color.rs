/// Color space conversion utilities
///
/// This module handles the 8-bit HSV encoding used by the meter:
/// - Hue in half-degree units (0-179)
/// - Saturation and value scaled to a byte (0-255)
///
/// and the conversion of that encoding to human units (degrees, percent).

use std::sync::OnceLock;

/// Number of hue steps in the 8-bit encoding (half a circle)
pub const HUE_STEPS: i32 = 180;

/// Fixed-point precision of the division tables
const HSV_SHIFT: u32 = 12;

/// Added before the final shift so it rounds to nearest
const HALF: i32 = 1 << (HSV_SHIFT - 1);

/// Reciprocal tables indexed by V (saturation) and by max - min (hue)
struct DivTables {
    sat: [i32; 256],
    hue: [i32; 256],
}

fn div_tables() -> &'static DivTables {
    static TABLES: OnceLock<DivTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut sat = [0; 256];
        let mut hue = [0; 256];
        for i in 1..256 {
            let d = i as f64;
            sat[i] = (f64::from(255 << HSV_SHIFT) / d).round_ties_even() as i32;
            hue[i] = (f64::from(HUE_STEPS << HSV_SHIFT) / (6.0 * d)).round_ties_even() as i32;
        }
        DivTables { sat, hue }
    })
}

/// Convert one 8-bit RGB pixel to 8-bit HSV
///
/// Integer algorithm of the common 8-bit convention:
/// 1. V = max(R, G, B)
/// 2. S = 255 * (V - min) / V via a rounded reciprocal table
/// 3. H from the dominant channel (R wins ties, then G), scaled to
///    half-degrees with a reciprocal table, floored after adding one half
/// 4. Negative hues wrap around by adding 180
pub fn rgb_to_hsv8(rgb: [u8; 3]) -> [u8; 3] {
    let tables = div_tables();
    let [r, g, b] = rgb.map(i32::from);

    let v = r.max(g).max(b);
    let diff = v - r.min(g).min(b);

    let s = (diff * tables.sat[v as usize] + HALF) >> HSV_SHIFT;

    let h = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    // Arithmetic shift floors negative values
    let mut h = (h * tables.hue[diff as usize] + HALF) >> HSV_SHIFT;
    if h < 0 {
        h += HUE_STEPS;
    }

    [h.clamp(0, 255) as u8, s as u8, v as u8]
}

/// HSV expressed in human units, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvDisplay {
    /// Hue in degrees (0-358, even values only)
    pub degrees: u16,
    /// Saturation in percent (0-100)
    pub saturation: u8,
    /// Value in percent (0-100)
    pub value: u8,
}

impl HsvDisplay {
    /// Convert the 8-bit encoding to degrees and percentages
    pub fn from_raw(hsv: [u8; 3]) -> Self {
        let [h, s, v] = hsv;
        Self {
            degrees: u16::from(h) * 2,
            saturation: byte_to_percent(s),
            value: byte_to_percent(v),
        }
    }
}

/// Map 0-255 to 0-100, rounded to the nearest integer
fn byte_to_percent(byte: u8) -> u8 {
    (f32::from(byte) / 255.0 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(rgb_to_hsv8([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv8([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv8([0, 0, 255]), [120, 255, 255]);
    }

    #[test]
    fn test_greys_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv8([0, 0, 0]), [0, 0, 0]);
        assert_eq!(rgb_to_hsv8([255, 255, 255]), [0, 0, 255]);
        assert_eq!(rgb_to_hsv8([128, 128, 128]), [0, 0, 128]);
    }

    #[test]
    fn test_secondary_colors() {
        assert_eq!(rgb_to_hsv8([255, 255, 0]), [30, 255, 255]);
        assert_eq!(rgb_to_hsv8([0, 255, 255]), [90, 255, 255]);
        assert_eq!(rgb_to_hsv8([255, 0, 255]), [150, 255, 255]);
    }

    #[test]
    fn test_hue_just_below_red_wraps() {
        // Slightly bluish red: negative hue wraps to the top of the range
        let [h, _, _] = rgb_to_hsv8([255, 0, 10]);
        assert_eq!(h, 179);
    }

    #[test]
    fn test_fixed_point_rounding_cases() {
        let cases: [([u8; 3], [u8; 3]); 8] = [
            // A negative hue that rounds to zero must not wrap
            ([60, 0, 1], [0, 255, 60]),
            ([0, 1, 58], [120, 255, 58]),
            ([255, 128, 0], [15, 255, 255]),
            ([10, 20, 30], [105, 170, 30]),
            ([200, 100, 50], [10, 191, 200]),
            ([1, 0, 0], [0, 255, 1]),
            ([0, 0, 1], [120, 255, 1]),
            ([254, 255, 255], [90, 1, 255]),
        ];
        for (rgb, expected) in cases {
            assert_eq!(rgb_to_hsv8(rgb), expected, "rgb {:?}", rgb);
        }
    }

    #[test]
    fn test_saturation_full_when_min_is_zero() {
        for v in 1..=255u8 {
            assert_eq!(rgb_to_hsv8([v, 0, 0]), [0, 255, v]);
        }
    }

    #[test]
    fn test_ranges_hold_for_sampled_cube() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let [h, _, _] = rgb_to_hsv8([r as u8, g as u8, b as u8]);
                    assert!(h < 180, "hue {} out of range for {:?}", h, (r, g, b));
                }
            }
        }
    }

    #[test]
    fn test_display_conversion() {
        assert_eq!(
            HsvDisplay::from_raw([0, 255, 255]),
            HsvDisplay { degrees: 0, saturation: 100, value: 100 }
        );
        assert_eq!(
            HsvDisplay::from_raw([179, 128, 0]),
            HsvDisplay { degrees: 358, saturation: 50, value: 0 }
        );
    }
}

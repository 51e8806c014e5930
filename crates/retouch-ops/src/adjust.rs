//! Pixel-wise contrast and brightness remap.

use retouch_core::{Argb, PixelBuffer};
use serde::{Deserialize, Serialize};

use crate::operation::ImageOperation;

/// Channel midpoint the contrast factor scales around.
const MIDPOINT: f64 = 127.5;

/// Adjust contrast and brightness by percentages.
///
/// For each colour channel `c` (alpha is untouched):
///
/// ```text
/// c' = clamp(round((1 + contrast/100) * (c - 127.5) + 127.5 * (1 + brightness/100)), 0, 255)
/// ```
///
/// Percentages are conventionally in `-100..=100` but are not range-checked.
/// `0, 0` is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContrastBrightness {
    pub contrast_percent: f64,
    pub brightness_percent: f64,
}

impl ContrastBrightness {
    /// Create a new adjustment.
    pub fn new(contrast_percent: f64, brightness_percent: f64) -> Self {
        Self {
            contrast_percent,
            brightness_percent,
        }
    }

    /// Remap a single channel value.
    pub fn remap_channel(&self, channel: u8) -> u8 {
        let contrast = 1.0 + self.contrast_percent / 100.0;
        let brightness = 1.0 + self.brightness_percent / 100.0;
        let value = contrast * (f64::from(channel) - MIDPOINT) + MIDPOINT * brightness;
        // Round half up, then saturate; NaN lands on 0.
        (value + 0.5).floor().clamp(0.0, 255.0) as u8
    }

    /// Lookup table for all 256 channel values.
    fn table(&self) -> [u8; 256] {
        std::array::from_fn(|c| self.remap_channel(c as u8))
    }
}

impl ImageOperation for ContrastBrightness {
    fn apply(&self, input: &PixelBuffer) -> PixelBuffer {
        let lut = self.table();
        let mut output = input.clone();
        for px in output.pixels_mut() {
            *px = remap_pixel(*px, &lut);
        }
        output
    }

    fn name(&self) -> &'static str {
        "contrast_brightness"
    }
}

/// Remap the colour channels of one sample through `lut`, keeping its alpha.
#[inline]
fn remap_pixel(px: Argb, lut: &[u8; 256]) -> Argb {
    px.with_rgb(lut[px.r() as usize], lut[px.g() as usize], lut[px.b() as usize])
}

//! Display zoom for presenting the current image.

use crate::config::ZoomConfig;

/// A zoom level, held as a percentage clamped to configured limits.
///
/// 100% is actual size, 50% half size, 200% double size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    percent: f64,
    limits: ZoomConfig,
}

impl Default for Zoom {
    fn default() -> Self {
        Self::with_limits(ZoomConfig::default())
    }
}

impl Zoom {
    /// Create a zoom level with the default `[50, 200]` limits.
    pub fn new(percent: f64) -> Self {
        let mut zoom = Self::default();
        zoom.set_percent(percent);
        zoom
    }

    /// Create a zoom level at the configured default.
    pub fn with_limits(limits: ZoomConfig) -> Self {
        let mut zoom = Self {
            percent: limits.default_percent,
            limits,
        };
        zoom.set_percent(limits.default_percent);
        zoom
    }

    /// The zoom as a percentage.
    #[inline]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// The zoom as a multiplier (`percent / 100`).
    #[inline]
    pub fn scale(&self) -> f64 {
        self.percent / 100.0
    }

    /// Set the zoom, clamped to the limits. NaN leaves the zoom unchanged.
    pub fn set_percent(&mut self, percent: f64) {
        if percent.is_nan() {
            return;
        }
        self.percent = percent
            .min(self.limits.max_percent)
            .max(self.limits.min_percent);
    }

    /// Scale image dimensions for display, rounding half up.
    pub fn scaled_size(&self, width: u32, height: u32) -> (u32, u32) {
        let scale = self.scale();
        let scale_dim = |d: u32| (f64::from(d) * scale + 0.5).floor() as u32;
        (scale_dim(width), scale_dim(height))
    }
}

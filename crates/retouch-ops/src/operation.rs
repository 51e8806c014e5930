//! The image operation contract and the serializable operation set.

use retouch_core::PixelBuffer;
use retouch_core::logging::{PerfSpan, targets};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjust::ContrastBrightness;
use crate::emboss::{Emboss, EmbossDirection};

/// A unit of work that consumes one raster image and produces another.
///
/// Implementations must be stateless with respect to any particular image:
/// applying the same value to equal inputs yields equal outputs. The input is
/// never modified.
pub trait ImageOperation {
    /// Produce the transformed image.
    fn apply(&self, input: &PixelBuffer) -> PixelBuffer;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Every operation kind that can be recorded in an edit history.
///
/// Serialized with an internal `"kind"` tag carrying exactly the operation's
/// parameters:
///
/// ```json
/// {"kind": "contrast_brightness", "contrast_percent": 20.0, "brightness_percent": -5.0}
/// {"kind": "emboss", "direction": 2}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// Pixel-wise contrast and brightness remap.
    ContrastBrightness(ContrastBrightness),
    /// Directional emboss convolution.
    Emboss(Emboss),
}

impl Operation {
    /// Shorthand for a contrast/brightness adjustment.
    pub fn contrast_brightness(contrast_percent: f64, brightness_percent: f64) -> Self {
        Self::ContrastBrightness(ContrastBrightness::new(contrast_percent, brightness_percent))
    }

    /// Shorthand for an emboss filter; indices outside `0..=7` select North.
    pub fn emboss(direction: i64) -> Self {
        Self::Emboss(Emboss::new(direction))
    }

    fn inner(&self) -> &dyn ImageOperation {
        match self {
            Self::ContrastBrightness(op) => op,
            Self::Emboss(op) => op,
        }
    }
}

impl ImageOperation for Operation {
    fn apply(&self, input: &PixelBuffer) -> PixelBuffer {
        let op = self.inner();
        let (width, height) = input.dimensions();
        let _perf = PerfSpan::new(op.name(), width, height);
        debug!(target: targets::OPS, operation = ?self, width, height, "applying operation");
        op.apply(input)
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}

impl From<ContrastBrightness> for Operation {
    fn from(op: ContrastBrightness) -> Self {
        Self::ContrastBrightness(op)
    }
}

impl From<Emboss> for Operation {
    fn from(op: Emboss) -> Self {
        Self::Emboss(op)
    }
}

impl From<EmbossDirection> for Operation {
    fn from(direction: EmbossDirection) -> Self {
        Self::Emboss(Emboss::with_direction(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::Argb;

    #[test]
    fn test_dispatch_matches_inner() {
        let img = PixelBuffer::filled(3, 2, Argb::new(200, 40, 90, 220));
        let adj = ContrastBrightness::new(25.0, 10.0);
        assert_eq!(Operation::from(adj).apply(&img), adj.apply(&img));

        let emboss = Emboss::new(5);
        assert_eq!(Operation::from(emboss).apply(&img), emboss.apply(&img));
    }

    #[test]
    fn test_names() {
        assert_eq!(Operation::contrast_brightness(0.0, 0.0).name(), "contrast_brightness");
        assert_eq!(Operation::emboss(1).name(), "emboss");
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let img = PixelBuffer::filled(2, 2, Argb::RED);
        let before = img.clone();
        let _ = Operation::emboss(0).apply(&img);
        let _ = Operation::contrast_brightness(50.0, 50.0).apply(&img);
        assert_eq!(img, before);
    }

    #[test]
    fn test_repeated_application_is_deterministic() {
        let mut img = PixelBuffer::new(4, 4);
        img.set(1, 2, Argb::new(255, 200, 10, 60));
        img.set(3, 0, Argb::new(90, 1, 2, 3));
        for op in [Operation::emboss(7), Operation::contrast_brightness(-30.0, 45.0)] {
            assert_eq!(op.apply(&img), op.apply(&img));
        }
    }
}

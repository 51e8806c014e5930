//! 3×3 integer convolution over ARGB buffers.
//!
//! - The kernel is centered on the output pixel: cell `(i, j)` samples
//!   `(x + j - 1, y + i - 1)`.
//! - Samples outside the image are borrowed through the center pixel rather
//!   than clamped per axis (see [`sample_extended`]).
//! - Channels are accumulated independently into a [`WeightedSum`]; turning
//!   that into an output sample is left to the caller's reducer.
//!
//! Complexity: O(W·H·9) per pass; memory: one output buffer.

use retouch_core::logging::targets;
use retouch_core::{Argb, PixelBuffer};
use tracing::trace;

/// A 3×3 kernel of integer weights, indexed `[row][column]`.
pub type Kernel3 = [[i32; 3]; 3];

/// Per-channel weighted sums gathered around one pixel.
///
/// Sums are signed and unbounded; reducers clamp when producing a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedSum {
    /// Weighted alpha sum.
    pub a: i64,
    /// Weighted red sum.
    pub r: i64,
    /// Weighted green sum.
    pub g: i64,
    /// Weighted blue sum.
    pub b: i64,
}

impl WeightedSum {
    #[inline]
    fn accumulate(&mut self, px: Argb, weight: i32) {
        let w = i64::from(weight);
        self.a += i64::from(px.a()) * w;
        self.r += i64::from(px.r()) * w;
        self.g += i64::from(px.g()) * w;
        self.b += i64::from(px.b()) * w;
    }

    /// Sum of the three colour channel sums.
    #[inline]
    pub fn rgb_total(&self) -> i64 {
        self.r + self.g + self.b
    }
}

/// Fetch the sample at `(sx, sy)` on behalf of the pixel at `(x, y)`.
///
/// - both axes out of range: the center pixel `(x, y)` itself
/// - only `sx` out of range: `(x, sy)`
/// - only `sy` out of range: `(sx, y)`
///
/// so edge pixels borrow along the row or column that passes through the
/// center, giving a soft fade at the border.
#[inline]
pub fn sample_extended(buffer: &PixelBuffer, x: u32, y: u32, sx: i64, sy: i64) -> Argb {
    let x_in = sx >= 0 && sx < i64::from(buffer.width());
    let y_in = sy >= 0 && sy < i64::from(buffer.height());
    match (x_in, y_in) {
        (true, true) => buffer.get(sx as u32, sy as u32),
        (false, true) => buffer.get(x, sy as u32),
        (true, false) => buffer.get(sx as u32, y),
        (false, false) => buffer.get(x, y),
    }
}

/// Gather the weighted neighborhood of `(x, y)`.
pub fn gather(buffer: &PixelBuffer, x: u32, y: u32, kernel: &Kernel3) -> WeightedSum {
    let mut sum = WeightedSum::default();
    for (i, row) in kernel.iter().enumerate() {
        for (j, &weight) in row.iter().enumerate() {
            // Zero weights contribute nothing
            if weight == 0 {
                continue;
            }
            let sx = i64::from(x) + j as i64 - 1;
            let sy = i64::from(y) + i as i64 - 1;
            sum.accumulate(sample_extended(buffer, x, y, sx, sy), weight);
        }
    }
    sum
}

/// Convolve `buffer` with `kernel`, reducing each weighted sum to a sample.
///
/// Every output sample is computed from the unmodified input, so the result
/// does not depend on traversal order.
pub fn convolve<F>(buffer: &PixelBuffer, kernel: &Kernel3, mut reduce: F) -> PixelBuffer
where
    F: FnMut(WeightedSum) -> Argb,
{
    let (width, height) = buffer.dimensions();
    let mut output = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            output.set(x, y, reduce(gather(buffer, x, y, kernel)));
        }
    }
    trace!(
        target: targets::CONVOLUTION,
        width,
        height,
        ?kernel,
        "convolution pass complete"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: Kernel3 = [[0, 0, 0], [0, 1, 0], [0, 0, 0]];

    /// 2×2 grays: 10 20 / 30 40.
    fn quad() -> PixelBuffer {
        let mut img = PixelBuffer::new(2, 2);
        img.set(0, 0, Argb::gray(10));
        img.set(1, 0, Argb::gray(20));
        img.set(0, 1, Argb::gray(30));
        img.set(1, 1, Argb::gray(40));
        img
    }

    #[test]
    fn test_identity_kernel() {
        let img = quad();
        let out = convolve(&img, &IDENTITY, |s| {
            Argb::new(s.a as u8, s.r as u8, s.g as u8, s.b as u8)
        });
        assert_eq!(out, img);
    }

    #[test]
    fn test_sample_inside() {
        let img = quad();
        assert_eq!(sample_extended(&img, 0, 0, 1, 1), Argb::gray(40));
    }

    #[test]
    fn test_sample_both_axes_out_uses_center() {
        let img = quad();
        assert_eq!(sample_extended(&img, 0, 0, -1, -1), Argb::gray(10));
        assert_eq!(sample_extended(&img, 1, 1, 2, 2), Argb::gray(40));
    }

    #[test]
    fn test_sample_one_axis_out_borrows_through_center() {
        let img = quad();
        // x out of range: keep the sample row, use the center column
        assert_eq!(sample_extended(&img, 0, 0, -1, 1), Argb::gray(30));
        // y out of range: keep the sample column, use the center row
        assert_eq!(sample_extended(&img, 0, 0, 1, -1), Argb::gray(20));
        assert_eq!(sample_extended(&img, 1, 1, 0, 2), Argb::gray(30));
    }

    #[test]
    fn test_gather_corner_with_diagonal_kernels() {
        let img = quad();

        // +1 at top-left, -1 at bottom-right
        let nw: Kernel3 = [[1, 0, 0], [0, 0, 0], [0, 0, -1]];
        let sum = gather(&img, 0, 0, &nw);
        assert_eq!(sum.r, 10 - 40);
        assert_eq!(sum.a, 0);

        // +1 at top-right, -1 at bottom-left
        let ne: Kernel3 = [[0, 0, 1], [0, 0, 0], [-1, 0, 0]];
        let sum = gather(&img, 0, 0, &ne);
        assert_eq!(sum.r, 20 - 30);
        assert_eq!(sum.rgb_total(), 3 * (20 - 30));
    }

    #[test]
    fn test_empty_buffer() {
        let img = PixelBuffer::new(0, 0);
        let out = convolve(&img, &IDENTITY, |_| Argb::WHITE);
        assert!(out.is_empty());
    }
}

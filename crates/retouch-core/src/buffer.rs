//! CPU-side ARGB pixel buffer.
//!
//! [`PixelBuffer`] is the unit every image operation reads and writes: a
//! row-major grid of packed [`Argb`] samples with a width and height.
//!
//! # Example
//!
//! ```
//! use retouch_core::{Argb, PixelBuffer};
//!
//! let mut img = PixelBuffer::filled(4, 3, Argb::WHITE);
//! img.set(1, 2, Argb::RED);
//! assert_eq!(img.get(1, 2), Argb::RED);
//! assert_eq!(img.dimensions(), (4, 3));
//! ```
//!
//! Coordinates outside the buffer are a caller defect: [`PixelBuffer::get`]
//! and [`PixelBuffer::set`] panic rather than clamp. Use
//! [`PixelBuffer::checked_get`] when probing is intended.

use image::RgbaImage;
use tracing::trace;

use crate::error::{CoreError, CoreResult};
use crate::logging::targets;
use crate::pixel::Argb;

/// A row-major grid of packed ARGB samples.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl PixelBuffer {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create a transparent black buffer with the specified dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` does not fit in `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Argb::TRANSPARENT)
    }

    /// Create a buffer filled with a single sample.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` does not fit in `usize`.
    pub fn filled(width: u32, height: u32, fill: Argb) -> Self {
        let len = match sample_count(width, height) {
            Ok(len) => len,
            Err(err) => panic!("{err}"),
        };
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    /// Create a buffer from row-major samples.
    ///
    /// The vector must hold exactly `width * height` samples.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Argb>) -> CoreResult<Self> {
        let expected = sample_count(width, height)?;
        if pixels.len() != expected {
            return Err(CoreError::InvalidPixelCount {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from row-major packed `0xAARRGGBB` words.
    pub fn from_argb_words(width: u32, height: u32, words: &[u32]) -> CoreResult<Self> {
        let pixels = bytemuck::cast_slice::<u32, Argb>(words).to_vec();
        Self::from_pixels(width, height, pixels)
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    /// Get the width of the buffer in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the buffer in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as a (width, height) tuple.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the buffer has no samples (zero width or height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether `(x, y)` addresses a sample in this buffer.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    // ========================================================================
    // PIXEL ACCESS
    // ========================================================================

    /// Get the sample at the specified coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    #[track_caller]
    pub fn get(&self, x: u32, y: u32) -> Argb {
        self.pixels[self.index(x, y)]
    }

    /// Set the sample at the specified coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, x: u32, y: u32, pixel: Argb) {
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }

    /// Get the sample at the specified coordinates.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn checked_get(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.offset(x, y)])
    }

    /// All samples in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// Mutable access to all samples in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Argb] {
        &mut self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Argb]> + '_ {
        // chunks() rejects a zero chunk size; a zero-width buffer has no samples anyway.
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Iterate over all samples as ((x, y), sample) tuples.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = ((u32, u32), Argb)> + '_ {
        let width = self.width.max(1);
        self.pixels.iter().enumerate().map(move |(i, &px)| {
            let i = i as u64;
            (((i % u64::from(width)) as u32, (i / u64::from(width)) as u32), px)
        })
    }

    /// The samples viewed as packed `0xAARRGGBB` words.
    #[inline]
    pub fn as_words(&self) -> &[u32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Transform each sample using a function.
    ///
    /// The function receives the (x, y) coordinates and current sample,
    /// and returns the new sample.
    #[must_use]
    pub fn map_pixels<F>(&self, mut f: F) -> Self
    where
        F: FnMut(u32, u32, Argb) -> Argb,
    {
        let mut out = self.clone();
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.offset(x, y);
                out.pixels[idx] = f(x, y, self.pixels[idx]);
            }
        }
        out
    }

    // ========================================================================
    // FORMAT CONVERSION
    // ========================================================================

    /// Convert to an `image` crate RGBA8 image, e.g. for display.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| self.get(x, y).into())
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    #[track_caller]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        self.offset(x, y)
    }
}

impl From<&RgbaImage> for PixelBuffer {
    fn from(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|&px| Argb::from(px)).collect();
        trace!(target: targets::BUFFER, width, height, "converted RGBA8 image");
        Self {
            width,
            height,
            pixels,
        }
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

fn sample_count(width: u32, height: u32) -> CoreResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(CoreError::DimensionsTooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_buffer_new() {
        let img = PixelBuffer::new(100, 50);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.dimensions(), (100, 50));
        assert_eq!(img.len(), 5000);
        assert!(img.pixels().iter().all(|&px| px == Argb::TRANSPARENT));
    }

    #[test]
    fn test_zero_sized_buffer() {
        let img = PixelBuffer::new(0, 7);
        assert!(img.is_empty());
        assert_eq!(img.rows().count(), 0);
        assert_eq!(img.checked_get(0, 0), None);
    }

    #[test]
    fn test_pixel_access() {
        let mut img = PixelBuffer::new(10, 10);
        img.set(5, 6, Argb::new(1, 2, 3, 4));
        assert_eq!(img.get(5, 6), Argb::new(1, 2, 3, 4));
        assert_eq!(img.checked_get(5, 6), Some(Argb::new(1, 2, 3, 4)));

        // Out of bounds should return None
        assert!(img.checked_get(10, 0).is_none());
        assert!(img.checked_get(0, 10).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let img = PixelBuffer::new(3, 3);
        let _ = img.get(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut img = PixelBuffer::new(3, 3);
        img.set(0, 3, Argb::WHITE);
    }

    #[test]
    fn test_from_pixels_invalid_size() {
        let result = PixelBuffer::from_pixels(2, 2, vec![Argb::RED]);
        assert_eq!(
            result,
            Err(CoreError::InvalidPixelCount {
                width: 2,
                height: 2,
                expected: 4,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_from_argb_words() {
        let img = PixelBuffer::from_argb_words(2, 1, &[0xFF00_00FF, 0x8012_3456]).unwrap();
        assert_eq!(img.get(0, 0), Argb::BLUE);
        assert_eq!(img.get(1, 0).channels(), (0x80, 0x12, 0x34, 0x56));
        assert_eq!(img.as_words(), &[0xFF00_00FF, 0x8012_3456]);
    }

    #[test]
    fn test_rows_and_enumerate() {
        let mut img = PixelBuffer::new(3, 2);
        img.set(2, 1, Argb::GREEN);
        let rows: Vec<_> = img.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], Argb::GREEN);

        let found: Vec<_> = img
            .enumerate_pixels()
            .filter(|&(_, px)| px == Argb::GREEN)
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(found, vec![(2, 1)]);
    }

    #[test]
    fn test_map_pixels() {
        let img = PixelBuffer::filled(4, 4, Argb::WHITE);
        let mapped = img.map_pixels(|x, _y, px| if x == 0 { Argb::RED } else { px });
        assert_eq!(mapped.get(0, 3), Argb::RED);
        assert_eq!(mapped.get(1, 3), Argb::WHITE);
        // Source is untouched
        assert_eq!(img.get(0, 3), Argb::WHITE);
    }

    #[test]
    fn test_rgba_image_conversion() {
        let mut img = PixelBuffer::new(2, 2);
        img.set(1, 0, Argb::new(128, 10, 20, 30));

        let rgba = img.to_rgba_image();
        assert_eq!(rgba.get_pixel(1, 0).0, [10, 20, 30, 128]);

        let back = PixelBuffer::from(&rgba);
        assert_eq!(back, img);
    }
}

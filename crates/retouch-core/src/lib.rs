//! Core pixel types for Retouch.
//!
//! This crate provides the raster representation every Retouch image
//! operation works on:
//!
//! - [`Argb`]: an 8-bit-per-channel sample packed as `a<<24 | r<<16 | g<<8 | b`
//! - [`PixelBuffer`]: a row-major grid of samples with fail-fast coordinate access
//!
//! # Example
//!
//! ```
//! use retouch_core::{Argb, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::filled(3, 3, Argb::WHITE);
//! buffer.set(1, 1, Argb::new(128, 255, 0, 0));
//!
//! let (a, r, g, b) = buffer.get(1, 1).channels();
//! assert_eq!((a, r, g, b), (128, 255, 0, 0));
//! ```
//!
//! Buffers convert to and from [`image::RgbaImage`] so presentation code can
//! hand decoded images in and draw the result.

mod buffer;
mod error;
pub mod logging;
mod pixel;

pub use buffer::PixelBuffer;
pub use error::{CoreError, CoreResult};
pub use pixel::{Argb, clamp_channel};

// Re-export the image crate so callers can name `RgbaImage` without a direct dependency
pub use image;

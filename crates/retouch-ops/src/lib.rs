//! Image operations for Retouch.
//!
//! Every operation implements [`ImageOperation`]: it reads a [`PixelBuffer`]
//! and returns a new one, leaving the input untouched. The closed set of
//! operations that can be recorded in an edit history is the serializable
//! [`Operation`] enum.
//!
//! - [`ContrastBrightness`]: pixel-wise remap of the colour channels
//! - [`Emboss`]: 3×3 directional convolution producing an opaque gray relief
//!
//! # Example
//!
//! ```
//! use retouch_core::{Argb, PixelBuffer};
//! use retouch_ops::{ImageOperation, Operation};
//!
//! let image = PixelBuffer::filled(1, 1, Argb::RED);
//! let brighter = Operation::contrast_brightness(0.0, 100.0).apply(&image);
//! assert_eq!(brighter.get(0, 0).channels(), (255, 255, 128, 128));
//!
//! let relief = Operation::emboss(2).apply(&image);
//! assert_eq!(relief.get(0, 0), Argb::gray(127));
//! ```
//!
//! New filter kinds can implement [`ImageOperation`] directly; adding them to
//! [`Operation`] makes them recordable.

mod adjust;
pub mod convolution;
mod emboss;
mod operation;

pub use adjust::ContrastBrightness;
pub use convolution::{Kernel3, WeightedSum};
pub use emboss::{Emboss, EmbossDirection};
pub use operation::{ImageOperation, Operation};

// Re-export the pixel types operations are defined over
pub use retouch_core::{Argb, PixelBuffer};

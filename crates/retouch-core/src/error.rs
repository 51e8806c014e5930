//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while constructing pixel buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The supplied sample count does not match `width * height`.
    #[error("invalid pixel data: expected {expected} samples for {width}x{height}, got {actual}")]
    InvalidPixelCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// The requested dimensions overflow the addressable sample count.
    #[error("image dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

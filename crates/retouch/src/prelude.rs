//! Commonly used types, for glob import.
//!
//! ```
//! use retouch::prelude::*;
//! ```

pub use crate::{
    Argb, ContrastBrightness, EditError, EditHistory, EditResult, EditState, EditableImage,
    EditorConfig, Emboss, EmbossDirection, ImageOperation, Operation, PixelBuffer, SharedImage,
    Zoom, ZoomConfig,
};

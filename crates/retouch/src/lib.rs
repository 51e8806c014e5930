//! Editable raster images with replayable undo/redo history.
//!
//! Retouch applies parameterized image operations to an in-memory ARGB
//! image and keeps every edit reversible:
//!
//! - [`EditableImage`]: original and current image plus undo/redo sequences
//! - [`Operation`]: the serializable operation set (contrast/brightness, emboss)
//! - [`EditHistory`]: a saved list of operations that can be replayed later
//! - [`EditorConfig`]: zoom limits and persistence options, loadable from TOML
//! - [`SharedImage`]: a lock-protected handle for multi-threaded callers
//!
//! # Editing
//!
//! ```
//! use retouch::prelude::*;
//!
//! let mut image = EditableImage::new();
//! image.load(PixelBuffer::filled(1, 1, Argb::RED));
//!
//! image.apply(Operation::contrast_brightness(0.0, 100.0))?;
//! assert_eq!(image.current().unwrap().get(0, 0).channels(), (255, 255, 128, 128));
//!
//! image.undo()?;
//! assert_eq!(image.current().unwrap().get(0, 0), Argb::RED);
//! # Ok::<(), EditError>(())
//! ```
//!
//! # Saving and Replaying History
//!
//! ```no_run
//! use retouch::prelude::*;
//!
//! # fn example(image: &EditableImage, original: PixelBuffer) -> EditResult<()> {
//! image.history().save("photo.history.json", image.config().pretty_history)?;
//!
//! let mut later = EditableImage::new();
//! later.restore(original, EditHistory::load("photo.history.json")?)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! All crates log through `tracing` with the targets listed in
//! [`retouch_core::logging::targets`]; install a subscriber to see them.

mod config;
mod editable;
mod error;
mod history;
pub mod prelude;
mod shared;
mod view;

pub use config::{EditorConfig, ZoomConfig};
pub use editable::{EditState, EditableImage};
pub use error::{EditError, EditResult};
pub use history::{EditHistory, HISTORY_VERSION};
pub use shared::SharedImage;
pub use view::Zoom;

// Re-export the pixel and operation crates
pub use retouch_core::{self, Argb, PixelBuffer};
pub use retouch_ops::{
    self, ContrastBrightness, Emboss, EmbossDirection, ImageOperation, Operation,
};

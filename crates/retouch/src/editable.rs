//! Editable images with undo/redo.
//!
//! [`EditableImage`] owns the image as first loaded (the *original*), the
//! result of every applied operation (the *current* image), and two
//! sequences of operations: applied ones for undo and undone ones for redo.
//!
//! The current image is always reproducible by replaying the undo sequence
//! onto the original. Operations such as emboss or clamped remaps discard
//! information, so undo and redo rebuild the current image from the original
//! instead of inverting anything.
//!
//! # Example
//!
//! ```
//! use retouch::{Argb, EditableImage, Operation, PixelBuffer};
//!
//! let mut image = EditableImage::new();
//! image.load(PixelBuffer::filled(3, 3, Argb::WHITE));
//!
//! image.apply(Operation::emboss(2))?;
//! assert_eq!(image.current().unwrap().get(1, 1), Argb::gray(127));
//!
//! image.undo()?;
//! assert_eq!(image.current().unwrap().get(1, 1), Argb::WHITE);
//!
//! image.redo()?;
//! assert!(!image.can_redo());
//! # Ok::<(), retouch::EditError>(())
//! ```

use retouch_core::PixelBuffer;
use retouch_core::logging::targets;
use retouch_ops::{ImageOperation, Operation};
use tracing::debug;

use crate::config::EditorConfig;
use crate::error::{EditError, EditResult};
use crate::history::{EditHistory, replay};
use crate::view::Zoom;

/// Where an [`EditableImage`] is in its editing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditState {
    /// No image loaded.
    Empty,
    /// Image loaded, nothing to undo or redo.
    Loaded,
    /// At least one operation can be undone and none redone.
    Edited,
    /// At least one undone operation can be redone.
    Redoable,
}

/// The original and current buffers of a loaded image.
#[derive(Debug, Clone)]
struct Loaded {
    original: PixelBuffer,
    current: PixelBuffer,
}

/// An image with a reversible operation history.
///
/// Not reentrant: `apply`, `undo` and `redo` take `&mut self`, so shared use
/// across threads goes through [`SharedImage`](crate::SharedImage) or another
/// single-writer wrapper.
#[derive(Debug, Clone, Default)]
pub struct EditableImage {
    image: Option<Loaded>,
    undo_ops: Vec<Operation>,
    redo_ops: Vec<Operation>,
    config: EditorConfig,
}

impl EditableImage {
    /// Create an editor with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor with the given configuration.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The editor configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Load a new image, discarding any previous image and history.
    pub fn load(&mut self, buffer: PixelBuffer) {
        debug!(
            target: targets::HISTORY,
            width = buffer.width(),
            height = buffer.height(),
            discarded = self.undo_ops.len() + self.redo_ops.len(),
            "loaded image"
        );
        self.image = Some(Loaded {
            current: buffer.clone(),
            original: buffer,
        });
        self.undo_ops.clear();
        self.redo_ops.clear();
    }

    /// Load `original` and rebuild the edits recorded in `history`.
    ///
    /// All recorded operations land on the undo sequence; redo is empty.
    pub fn restore(&mut self, original: PixelBuffer, history: EditHistory) -> EditResult<()> {
        history.check_version()?;
        let current = history.replay(&original);
        debug!(
            target: targets::HISTORY,
            operations = history.operations.len(),
            "restored edit history"
        );
        self.image = Some(Loaded { original, current });
        self.undo_ops = history.operations;
        self.redo_ops.clear();
        Ok(())
    }

    /// Unload the image and forget its history.
    pub fn close(&mut self) {
        debug!(target: targets::HISTORY, "closed image");
        self.image = None;
        self.undo_ops.clear();
        self.redo_ops.clear();
    }

    /// Discard every edit, returning the current image to the original.
    pub fn revert(&mut self) -> EditResult<()> {
        let loaded = self.image.as_mut().ok_or(EditError::NoImage)?;
        loaded.current = loaded.original.clone();
        debug!(
            target: targets::HISTORY,
            discarded = self.undo_ops.len() + self.redo_ops.len(),
            "reverted to original"
        );
        self.undo_ops.clear();
        self.redo_ops.clear();
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether an image is loaded.
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// The image as first loaded.
    #[inline]
    pub fn original(&self) -> Option<&PixelBuffer> {
        self.image.as_ref().map(|l| &l.original)
    }

    /// The image after every applied operation.
    #[inline]
    pub fn current(&self) -> Option<&PixelBuffer> {
        self.image.as_ref().map(|l| &l.current)
    }

    /// The applied operations, oldest first.
    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.undo_ops
    }

    /// The undone operations, most recently undone last.
    #[inline]
    pub fn undone_operations(&self) -> &[Operation] {
        &self.redo_ops
    }

    /// Check if undo is available.
    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo_ops.is_empty()
    }

    /// Check if redo is available.
    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_ops.is_empty()
    }

    /// Get the number of operations that can be undone.
    #[inline]
    pub fn undo_len(&self) -> usize {
        self.undo_ops.len()
    }

    /// Get the number of operations that can be redone.
    #[inline]
    pub fn redo_len(&self) -> usize {
        self.redo_ops.len()
    }

    /// The current lifecycle state.
    pub fn state(&self) -> EditState {
        if self.image.is_none() {
            EditState::Empty
        } else if self.can_redo() {
            EditState::Redoable
        } else if self.can_undo() {
            EditState::Edited
        } else {
            EditState::Loaded
        }
    }

    /// A saveable copy of the applied operations.
    pub fn history(&self) -> EditHistory {
        EditHistory::new(self.undo_ops.clone())
    }

    /// Display size of the current image at `zoom`.
    ///
    /// Falls back to the configured empty-view size when nothing is loaded.
    pub fn preferred_size(&self, zoom: &Zoom) -> (u32, u32) {
        match self.current() {
            Some(current) => zoom.scaled_size(current.width(), current.height()),
            None => self.config.empty_view_size,
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Apply an operation to the current image.
    ///
    /// The operation is recorded for undo and the redo sequence is discarded.
    pub fn apply(&mut self, op: impl Into<Operation>) -> EditResult<()> {
        let op = op.into();
        let loaded = self.image.as_mut().ok_or(EditError::NoImage)?;
        loaded.current = op.apply(&loaded.current);
        self.undo_ops.push(op);
        let discarded = self.redo_ops.len();
        self.redo_ops.clear();
        debug!(
            target: targets::HISTORY,
            operation = op.name(),
            undo = self.undo_ops.len(),
            discarded,
            "applied operation"
        );
        Ok(())
    }

    /// Undo the most recent operation.
    ///
    /// Fails with [`EditError::NothingToUndo`] without touching the image
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> EditResult<()> {
        let loaded = self.image.as_mut().ok_or(EditError::NoImage)?;
        let op = self.undo_ops.pop().ok_or(EditError::NothingToUndo)?;
        loaded.current = replay(&loaded.original, &self.undo_ops);
        self.redo_ops.push(op);
        debug!(
            target: targets::HISTORY,
            operation = op.name(),
            undo = self.undo_ops.len(),
            redo = self.redo_ops.len(),
            "undid operation"
        );
        Ok(())
    }

    /// Redo the most recently undone operation.
    ///
    /// Fails with [`EditError::NothingToRedo`] without touching the image
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> EditResult<()> {
        let loaded = self.image.as_mut().ok_or(EditError::NoImage)?;
        let op = self.redo_ops.pop().ok_or(EditError::NothingToRedo)?;
        self.undo_ops.push(op);
        loaded.current = replay(&loaded.original, &self.undo_ops);
        debug!(
            target: targets::HISTORY,
            operation = op.name(),
            undo = self.undo_ops.len(),
            redo = self.redo_ops.len(),
            "redid operation"
        );
        Ok(())
    }
}

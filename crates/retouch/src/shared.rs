//! Thread-shareable handle to an editable image.
//!
//! [`EditableImage`] is single-writer. [`SharedImage`] serializes every edit
//! behind one mutex so several threads (e.g. a UI thread and a scripting
//! thread) can drive the same session. Each call still runs to completion on
//! the calling thread while holding the lock.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use retouch_core::PixelBuffer;
use retouch_ops::Operation;

use crate::editable::{EditState, EditableImage};
use crate::error::EditResult;

/// A cloneable, lock-protected [`EditableImage`].
#[derive(Debug, Clone, Default)]
pub struct SharedImage {
    inner: Arc<Mutex<EditableImage>>,
}

impl SharedImage {
    /// Wrap an editor for shared use.
    pub fn new(image: EditableImage) -> Self {
        Self {
            inner: Arc::new(Mutex::new(image)),
        }
    }

    /// Lock the editor for a sequence of calls that must not interleave.
    pub fn lock(&self) -> MutexGuard<'_, EditableImage> {
        self.inner.lock()
    }

    /// Load a new image, discarding any previous image and history.
    pub fn load(&self, buffer: PixelBuffer) {
        self.inner.lock().load(buffer);
    }

    /// Apply an operation to the current image.
    pub fn apply(&self, op: impl Into<Operation>) -> EditResult<()> {
        self.inner.lock().apply(op)
    }

    /// Undo the most recent operation.
    pub fn undo(&self) -> EditResult<()> {
        self.inner.lock().undo()
    }

    /// Redo the most recently undone operation.
    pub fn redo(&self) -> EditResult<()> {
        self.inner.lock().redo()
    }

    /// Get the current lifecycle state.
    pub fn state(&self) -> EditState {
        self.inner.lock().state()
    }

    /// Run `f` against the current image while holding the lock.
    ///
    /// Use this for rendering without copying the buffer.
    pub fn with_current<R>(&self, f: impl FnOnce(Option<&PixelBuffer>) -> R) -> R {
        f(self.inner.lock().current())
    }

    /// A copy of the current image.
    pub fn snapshot(&self) -> Option<PixelBuffer> {
        self.inner.lock().current().cloned()
    }
}

impl From<EditableImage> for SharedImage {
    fn from(image: EditableImage) -> Self {
        Self::new(image)
    }
}

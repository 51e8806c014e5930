//! Saved edit histories.
//!
//! An [`EditHistory`] is the ordered list of operations applied to an image.
//! Saved next to the image, it lets a later session rebuild the edited result
//! by replaying the operations onto the original.
//!
//! ```json
//! {
//!   "version": 1,
//!   "operations": [
//!     {"kind": "contrast_brightness", "contrast_percent": 20.0, "brightness_percent": 0.0},
//!     {"kind": "emboss", "direction": 4}
//!   ]
//! }
//! ```

use std::io::Write;
use std::path::Path;

use retouch_core::PixelBuffer;
use retouch_core::logging::targets;
use retouch_ops::{ImageOperation, Operation};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::error::{EditError, EditResult};

/// Current on-disk format version.
pub const HISTORY_VERSION: u32 = 1;

/// An ordered, replayable list of applied operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditHistory {
    /// Format version the history was written with.
    pub version: u32,
    /// Operations in application order.
    pub operations: Vec<Operation>,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl EditHistory {
    /// Create a history in the current format.
    pub fn new(operations: Vec<Operation>) -> Self {
        Self {
            version: HISTORY_VERSION,
            operations,
        }
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether no operations are recorded.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Replay every operation onto `original`.
    pub fn replay(&self, original: &PixelBuffer) -> PixelBuffer {
        replay(original, &self.operations)
    }

    /// Encode as JSON.
    pub fn to_json(&self, pretty: bool) -> EditResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Decode from JSON, rejecting unknown format versions.
    pub fn from_json(s: &str) -> EditResult<Self> {
        let history: Self = serde_json::from_str(s)?;
        history.check_version()?;
        Ok(history)
    }

    /// Write to a file.
    ///
    /// The file is written atomically: the data goes to a temporary file in
    /// the same directory, which then replaces the target.
    pub fn save(&self, path: impl AsRef<Path>, pretty: bool) -> EditResult<()> {
        let path = path.as_ref();
        let json = self.to_json(pretty)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(|e| EditError::io(dir, e))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| EditError::io(file.path(), e))?;
        file.persist(path).map_err(|e| EditError::io(path, e.error))?;

        debug!(
            target: targets::PERSIST,
            path = %path.display(),
            operations = self.operations.len(),
            "saved edit history"
        );
        Ok(())
    }

    /// Read from a file.
    pub fn load(path: impl AsRef<Path>) -> EditResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EditError::io(path, e))?;
        let history = Self::from_json(&content)?;
        debug!(
            target: targets::PERSIST,
            path = %path.display(),
            operations = history.operations.len(),
            "loaded edit history"
        );
        Ok(history)
    }

    pub(crate) fn check_version(&self) -> EditResult<()> {
        if self.version != HISTORY_VERSION {
            return Err(EditError::UnsupportedHistoryVersion {
                found: self.version,
                supported: HISTORY_VERSION,
            });
        }
        Ok(())
    }
}

/// Apply `operations` in order, starting from a copy of `original`.
pub(crate) fn replay(original: &PixelBuffer, operations: &[Operation]) -> PixelBuffer {
    trace!(
        target: targets::HISTORY,
        operations = operations.len(),
        "replaying from original"
    );
    operations
        .iter()
        .fold(original.clone(), |image, op| op.apply(&image))
}

//! Error types for editing sessions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while editing, persisting, or configuring.
#[derive(Error, Debug)]
pub enum EditError {
    /// No image has been loaded into the editor.
    #[error("no image loaded")]
    NoImage,

    /// The undo sequence is empty.
    #[error("nothing to undo")]
    NothingToUndo,

    /// The redo sequence is empty.
    #[error("nothing to redo")]
    NothingToRedo,

    /// A saved history was written by an incompatible format version.
    #[error("unsupported history version {found} (supported: {supported})")]
    UnsupportedHistoryVersion { found: u32, supported: u32 },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A history could not be encoded or decoded.
    #[error("invalid history data: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be parsed.
    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EditError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for editing operations.
pub type EditResult<T> = Result<T, EditError>;

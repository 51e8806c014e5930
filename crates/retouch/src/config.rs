//! Editor configuration.
//!
//! [`EditorConfig`] can be built in code or read from TOML. Missing keys take
//! their defaults, so a partial file is valid:
//!
//! ```toml
//! pretty_history = false
//!
//! [zoom]
//! max_percent = 400.0
//! ```

use std::path::Path;

use retouch_core::logging::targets;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EditError, EditResult};

/// Limits and initial value for the display zoom, as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Smallest allowed zoom.
    pub min_percent: f64,
    /// Largest allowed zoom.
    pub max_percent: f64,
    /// Zoom used for newly created views.
    pub default_percent: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_percent: 50.0,
            max_percent: 200.0,
            default_percent: 100.0,
        }
    }
}

impl ZoomConfig {
    /// Check that `0 < min <= default <= max`.
    pub fn validate(&self) -> EditResult<()> {
        let Self {
            min_percent,
            max_percent,
            default_percent,
        } = *self;
        if !(min_percent > 0.0) || !min_percent.is_finite() || !max_percent.is_finite() {
            return Err(EditError::InvalidConfig(format!(
                "zoom limits must be positive and finite (min {min_percent}, max {max_percent})"
            )));
        }
        if !(min_percent <= default_percent && default_percent <= max_percent) {
            return Err(EditError::InvalidConfig(format!(
                "default zoom {default_percent} outside [{min_percent}, {max_percent}]"
            )));
        }
        Ok(())
    }
}

/// Configuration options for an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Write saved histories as indented JSON.
    pub pretty_history: bool,
    /// Size reported for the view when no image is loaded.
    pub empty_view_size: (u32, u32),
    /// Display zoom limits.
    pub zoom: ZoomConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            pretty_history: true,
            empty_view_size: (450, 450),
            zoom: ZoomConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Set the zoom limits.
    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set whether histories are written as indented JSON.
    #[must_use]
    pub fn with_pretty_history(mut self, pretty: bool) -> Self {
        self.pretty_history = pretty;
        self
    }

    /// Set the size reported when no image is loaded.
    #[must_use]
    pub fn with_empty_view_size(mut self, width: u32, height: u32) -> Self {
        self.empty_view_size = (width, height);
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> EditResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> EditResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EditError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        debug!(target: targets::PERSIST, path = %path.display(), "loaded editor configuration");
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> EditResult<String> {
        toml::to_string(self).map_err(|e| EditError::InvalidConfig(e.to_string()))
    }

    /// Check every value is in range.
    pub fn validate(&self) -> EditResult<()> {
        self.zoom.validate()
    }
}

//! Editor settings loaded from a JSON file.
//!
//! Missing fields take their defaults, so an empty object is a valid
//! settings file.

use crate::constants::{
    DEFAULT_ANCHOR_RADIUS, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DUPLICATE_OFFSET,
    MAX_HISTORY_STATES,
};
use crate::error::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Number of checkpoints kept on the undo stack, baseline included
    pub history_capacity: usize,
    /// Press distance from an anchor that starts a connection drag
    pub anchor_radius: f32,
    /// Offset of a duplicated node from its original
    pub duplicate_offset: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            history_capacity: MAX_HISTORY_STATES,
            anchor_radius: DEFAULT_ANCHOR_RADIUS,
            duplicate_offset: DEFAULT_DUPLICATE_OFFSET,
        }
    }
}

/// Location of the user's settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("erdraft").join("settings.json"))
}

impl EditorSettings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> EditorResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> EditorResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> EditorResult<()> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(EditorError::InvalidSettings(format!(
                "canvas size must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.history_capacity == 0 {
            return Err(EditorError::InvalidSettings(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.anchor_radius < 0.0 {
            return Err(EditorError::InvalidSettings(
                "anchor_radius must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

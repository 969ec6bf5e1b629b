//! Host configuration.
//!
//! Read from JSON. Every field has a default, so a partial file (or no file
//! at all) is valid. The default location follows platform conventions via
//! `directories` (XDG on Linux, AppData on Windows).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{HostError, Result};
use crate::geometry::Size;

pub const CONFIG_FILE_NAME: &str = "host.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Title of the top-level window.
    pub title: String,
    /// Initial client width in pixels.
    pub width: u32,
    /// Initial client height in pixels.
    pub height: u32,
    /// Color each frame is cleared to before the UI core paints.
    pub background: Rgba,
    /// Pixel-precise wheel deltas are divided by this to get lines.
    pub pixels_per_line: f64,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "zimgui".to_string(),
            width: 800,
            height: 600,
            background: Rgba::WHITE,
            pixels_per_line: 20.0,
            log_filter: "info,wgpu=warn,naga=warn".to_string(),
        }
    }
}

impl HostConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn initial_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        let config: HostConfig =
            serde_json::from_str(text).map_err(|e| HostError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_json(path, &text)
    }

    /// `<config dir>/zimgui/host.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "zimgui", "zimgui")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from `path` or the default location; fall back to defaults when
    /// the file does not exist. A file that exists but is invalid is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Ok(Self::default());
        };

        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "config loaded");
                Ok(config)
            }
            Err(HostError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |reason: &str| HostError::Config {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };
        if self.width == 0 || self.height == 0 {
            return Err(invalid("width and height must be non-zero"));
        }
        if !(self.pixels_per_line.is_finite() && self.pixels_per_line > 0.0) {
            return Err(invalid("pixels_per_line must be a positive number"));
        }
        Ok(())
    }
}

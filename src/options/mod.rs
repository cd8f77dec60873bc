//! Centralized playback/display options with TOML preset support.
//!
//! All tweakable settings (pacing, motion, layout, colors, keybindings) are
//! consolidated here. Options serialize to/from TOML so a host can ship
//! presets alongside its scene.

mod colors;
mod keybindings;
mod layout;
mod motion;
mod playback;

use std::path::Path;

pub use colors::ColorOptions;
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
pub use motion::MotionOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SortVizError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Step pacing and session setup.
    pub playback: PlaybackOptions,
    /// Element travel parameters.
    pub motion: MotionOptions,
    /// Slot row placement.
    pub layout: LayoutOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, SortVizError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| SortVizError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SortVizError> {
        let content =
            std::fs::read_to_string(path).map_err(SortVizError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SortVizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SortVizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SortVizError::Io)?;
        }
        std::fs::write(path, content).map_err(SortVizError::Io)
    }
}

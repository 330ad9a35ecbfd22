//! Game settings
//!
//! Loaded from an optional JSON file. Every field has a default, so a partial
//! file (or none at all) is fine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::highscores::DEFAULT_HIGHSCORE_FILE;
pub use crate::sim::LevelUpRule;

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate the loop is paced to
    pub target_fps: usize,
    /// Where the high score is read and written
    pub highscore_path: PathBuf,
    /// How score milestones turn into level-ups
    pub level_up_rule: LevelUpRule,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Window title
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_FILE),
            level_up_rule: LevelUpRule::default(),
            seed: None,
            window_title: "Tap Game".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings file {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings file {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Effective frame rate (never zero)
    pub fn fps(&self) -> usize {
        self.target_fps.max(1)
    }
}

//! Game settings and preferences
//!
//! Loaded from an optional JSON file by the native binary. Gameplay geometry
//! is not configurable; see `crate::consts`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
pub use crate::sim::ConfirmMode;

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How a held confirm key is interpreted
    pub confirm_mode: ConfirmMode,
    /// Fixed RNG seed (wall-clock seeded when absent)
    pub seed: Option<u64>,
    /// Ticks the headless demo runs for
    pub demo_ticks: u64,
    /// Let the autopilot play
    pub autopilot: bool,
    /// Dump an ASCII frame every N ticks (0 = never)
    pub frame_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confirm_mode: ConfirmMode::Edge,
            seed: None,
            // One minute at 60 Hz
            demo_ticks: 3_600,
            autopilot: true,
            frame_interval: 0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings if a path is given, falling back to defaults on error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("{e}; using default settings");
                Self::default()
            }),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.demo_ticks == 0 {
            return Err(SettingsError::Invalid {
                field: "demo_ticks",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.frame_interval > self.demo_ticks {
            return Err(SettingsError::Invalid {
                field: "frame_interval",
                reason: format!("{} exceeds demo_ticks ({})", self.frame_interval, self.demo_ticks),
            });
        }
        Ok(())
    }

    /// Whether an ASCII frame should be dumped after the given tick
    pub fn dumps_frame(&self, tick: u64) -> bool {
        self.frame_interval != 0 && tick.is_multiple_of(self.frame_interval)
    }
}

//! Headless driver settings
//!
//! Read from an optional JSON file; missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_MS;
use crate::sim::{ScenarioError, TickDuration};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which intent source drives the characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PilotMode {
    /// No input at all
    Idle,
    /// Seeded random controls
    #[default]
    Random,
}

impl PilotMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PilotMode::Idle => "idle",
            PilotMode::Random => "random",
        }
    }
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tick length in milliseconds
    pub tick_ms: u64,
    /// Number of ticks to simulate
    pub ticks: u64,
    /// Seed for the random pilot
    pub seed: u64,
    pub pilot: PilotMode,
    /// Pace ticks against wall-clock time
    pub realtime: bool,
    /// Print the final render snapshot as JSON
    pub print_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            ticks: 4000,
            seed: 1,
            pilot: PilotMode::Random,
            realtime: false,
            print_snapshot: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn tick_duration(&self) -> Result<TickDuration, ScenarioError> {
        TickDuration::from_millis(self.tick_ms)
    }
}

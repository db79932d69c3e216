//! Simulation settings, read from a TOML file.
//!
//! Every section and field is optional and falls back to its default.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{MoveOptions, SideStepTracker, Stroll};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Movement of the keyboard-controlled entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub speed: i64,
    pub max_sidestep_distance: i64,
    pub sidestep_speed: i64,
    pub allow_slide: bool,
    /// Ticks per leg of the square walked while no arrow key is held, 0 disables it.
    pub autopilot_leg_ticks: u64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 1,
            max_sidestep_distance: 16,
            sidestep_speed: 1,
            allow_slide: true,
            autopilot_leg_ticks: 64,
        }
    }
}

impl MovementConfig {
    pub fn side_step_tracker(&self) -> SideStepTracker {
        SideStepTracker::new(self.max_sidestep_distance)
    }

    pub fn move_options(&self, sidestep_distance: i64) -> MoveOptions {
        MoveOptions {
            sidestep_distance,
            sidestep_speed: self.sidestep_speed,
            allow_slide: self.allow_slide,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrollConfig {
    pub idle_ticks: u64,
    pub walk_ticks: u64,
    pub speed: i64,
}

impl Default for StrollConfig {
    fn default() -> Self {
        Self {
            idle_ticks: 250,
            walk_ticks: 35,
            speed: 1,
        }
    }
}

impl StrollConfig {
    pub fn stroll(&self) -> Stroll {
        Stroll::new(self.idle_ticks, self.walk_ticks, self.speed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub seed: u64,
    pub tick_rate_hz: u32,
    /// Number of ticks to run, 0 runs forever.
    pub ticks: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 19878367467712,
            tick_rate_hz: 60,
            ticks: 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub movement: MovementConfig,
    pub stroll: StrollConfig,
    pub simulation: RunConfig,
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

//! Runtime simulation configuration.
//!
//! [`SimulationConfig`] carries the tunables a host may override (seed and
//! feed periods). Missing fields fall back to the constants in
//! [`crate::config`], so a config file only needs the keys it changes.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_SEED, MONITORING_INTERVAL_SECS, TEAM_INTERVAL_SECS};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or validating a [`SimulationConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The config file is not valid JSON for this schema.
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid value for `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// SimulationConfig
// ---------------------------------------------------------------------------

/// Host-provided tunables. Insert before adding `SimulationPlugin` to take
/// effect; the plugin inserts the default otherwise.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the monitoring feed's random walk.
    pub seed: u64,
    /// Seconds between monitoring feed updates.
    pub monitoring_interval_secs: f32,
    /// Seconds between rescue team position updates.
    pub team_interval_secs: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            monitoring_interval_secs: MONITORING_INTERVAL_SECS,
            team_interval_secs: TEAM_INTERVAL_SECS,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject periods a repeating timer cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_period("monitoring_interval_secs", self.monitoring_interval_secs)?;
        check_period("team_interval_secs", self.team_interval_secs)?;
        Ok(())
    }

    pub fn monitoring_interval(&self) -> Duration {
        Duration::from_secs_f32(self.monitoring_interval_secs)
    }

    pub fn team_interval(&self) -> Duration {
        Duration::from_secs_f32(self.team_interval_secs)
    }
}

fn check_period(field: &'static str, secs: f32) -> Result<(), ConfigError> {
    if secs.is_finite() && secs > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("period must be a positive number of seconds, got {secs}"),
        })
    }
}

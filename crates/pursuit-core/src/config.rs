//! Scenario Configuration
//!
//! Loads the scenario knobs from a TOML file. Every field is optional in the
//! file; missing values fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::constants::MAX_AGENTS;

/// Default scenario file path
pub const DEFAULT_SCENARIO_PATH: &str = "scenario.toml";

/// Parameters for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of pursuers (at least one)
    pub pursuer_count: usize,
    /// Number of evaders (may be zero)
    pub evader_count: usize,
    /// Standoff distance evaders try to keep from the nearest pursuer
    pub safe_distance: f64,
    /// Resource a pursuer loses every tick to its own upkeep, in (0, 1]
    pub decay_rate: f64,
    /// Resource an evader strips per tick of harassment, in (0, 0.5]
    pub harass_power: f64,
    /// Ticks to run when driven from the command line
    pub steps: u64,
    /// Seed for initial placement and activation order
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            pursuer_count: 1,
            evader_count: 3,
            safe_distance: 15.0,
            decay_rate: 0.3,
            harass_power: 0.2,
            steps: 150,
            seed: 42,
        }
    }
}

impl ScenarioConfig {
    /// Loads a scenario from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Loads the scenario from the default path, or uses defaults if no file is there.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_SCENARIO_PATH).exists() {
            Self::load(DEFAULT_SCENARIO_PATH)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses a scenario from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Checks every knob against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pursuer_count == 0 {
            return Err(ConfigError::NoPursuers);
        }
        validate_agent_count(self.pursuer_count.saturating_add(self.evader_count))?;
        if self.steps == 0 {
            return Err(ConfigError::InvalidSteps);
        }
        validate_evader_params(self.safe_distance, self.harass_power)?;
        validate_decay_rate(self.decay_rate)
    }
}

/// Checks a scenario's total agent count stays within [`MAX_AGENTS`].
pub fn validate_agent_count(total: usize) -> Result<(), ConfigError> {
    if total > MAX_AGENTS {
        return Err(ConfigError::TooManyAgents {
            requested: total,
            max: MAX_AGENTS,
        });
    }
    Ok(())
}

/// Checks a pursuer's decay rate lies in (0, 1].
pub fn validate_decay_rate(decay_rate: f64) -> Result<(), ConfigError> {
    if decay_rate.is_finite() && decay_rate > 0.0 && decay_rate <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDecayRate(decay_rate))
    }
}

/// Checks an evader's safe distance is positive and its harass power lies in (0, 0.5].
pub fn validate_evader_params(safe_distance: f64, harass_power: f64) -> Result<(), ConfigError> {
    if !(safe_distance.is_finite() && safe_distance > 0.0) {
        return Err(ConfigError::InvalidSafeDistance(safe_distance));
    }
    if !(harass_power.is_finite() && harass_power > 0.0 && harass_power <= 0.5) {
        return Err(ConfigError::InvalidHarassPower(harass_power));
    }
    Ok(())
}

/// Errors from loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("at least one pursuer is required")]
    NoPursuers,

    #[error("safe distance must be a positive number, got {0}")]
    InvalidSafeDistance(f64),

    #[error("decay rate must be in (0, 1], got {0}")]
    InvalidDecayRate(f64),

    #[error("harass power must be in (0, 0.5], got {0}")]
    InvalidHarassPower(f64),

    #[error("{requested} agents requested, at most {max} allowed")]
    TooManyAgents { requested: usize, max: usize },

    #[error("step count must be at least 1")]
    InvalidSteps,

    #[error("agent id {0} is used more than once")]
    DuplicateAgentId(u32),
}

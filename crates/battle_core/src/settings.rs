use bevy::prelude::Resource;
use chrono::Utc;
use thiserror::Error;
use tracing::warn;

use crate::consts::FIXED_DELTA;

const SEED_VAR: &str = "SIMULATION_SEED";
const FIXED_DT_VAR: &str = "SIMULATION_FIXED_DT";

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{key} must be {expected}, got {value:?}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Runtime knobs for a session. Rules themselves are fixed in [`crate::consts`].
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub seed: u64,
    pub fixed_delta: f64,
}

impl SimulationParams {
    /// Reads the environment, warning and falling back on bad values.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|err| {
            warn!(target: "battle_core.settings", %err, "ignoring simulation overrides");
            Self::default()
        })
    }

    pub fn try_from_env() -> Result<Self, SettingsError> {
        Self::parse(
            std::env::var(SEED_VAR).ok().as_deref(),
            std::env::var(FIXED_DT_VAR).ok().as_deref(),
        )
    }

    pub fn parse(seed: Option<&str>, fixed_delta: Option<&str>) -> Result<Self, SettingsError> {
        let seed = match seed {
            Some(raw) => raw.trim().parse().map_err(|_| SettingsError::InvalidValue {
                key: SEED_VAR,
                value: raw.to_owned(),
                expected: "an unsigned integer",
            })?,
            None => clock_seed(),
        };
        let fixed_delta = match fixed_delta {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|dt| dt.is_finite() && *dt > 0.0)
                .ok_or_else(|| SettingsError::InvalidValue {
                    key: FIXED_DT_VAR,
                    value: raw.to_owned(),
                    expected: "a positive number of seconds",
                })?,
            None => FIXED_DELTA,
        };
        Ok(Self { seed, fixed_delta })
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            fixed_delta: FIXED_DELTA,
        }
    }
}

fn clock_seed() -> u64 {
    Utc::now().timestamp_millis() as u64
}

// Tunable constants for the adaptive sampler
// defaults match the values the world builder was tuned with

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParamError, Result};

pub const LEARNING_MINIMUM: f32 = 0.05;
pub const LEARNING_MAXIMUM: f32 = 0.75;
pub const LEARNING_DECAY: f32 = 0.999; // applied once per adaptation step
pub const MAXIMUM_VARIANCE: f32 = 1.0;
pub const MAX_REJECTION_ATTEMPTS: u32 = 1000; // gaussian redraws before clamping

/// Configuration for one [`ParameterSpace`](crate::ParameterSpace).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceConfig {
    pub learning_minimum: f32,
    pub learning_maximum: f32, // starting and reset value
    pub learning_decay: f32,
    pub maximum_variance: f32,
    pub max_rejection_attempts: u32,
    pub rng_seed: Option<u64>, // clock-derived and logged when absent
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            learning_minimum: LEARNING_MINIMUM,
            learning_maximum: LEARNING_MAXIMUM,
            learning_decay: LEARNING_DECAY,
            maximum_variance: MAXIMUM_VARIANCE,
            max_rejection_attempts: MAX_REJECTION_ATTEMPTS,
            rng_seed: None,
        }
    }
}

impl SpaceConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_minimum.is_finite() && self.learning_minimum > 0.0) {
            return Err(ParamError::InvalidConfig(format!(
                "learning_minimum {} must be finite and > 0",
                self.learning_minimum
            )));
        }
        if !(self.learning_maximum.is_finite() && self.learning_maximum >= self.learning_minimum) {
            return Err(ParamError::InvalidConfig(format!(
                "learning_maximum {} must be finite and >= learning_minimum {}",
                self.learning_maximum, self.learning_minimum
            )));
        }
        if !(self.learning_decay > 0.0 && self.learning_decay <= 1.0) {
            return Err(ParamError::InvalidConfig(format!(
                "learning_decay {} must lie in (0, 1]",
                self.learning_decay
            )));
        }
        if !(self.maximum_variance.is_finite() && self.maximum_variance >= 0.0) {
            return Err(ParamError::InvalidConfig(format!(
                "maximum_variance {} must be finite and >= 0",
                self.maximum_variance
            )));
        }
        if self.max_rejection_attempts == 0 {
            return Err(ParamError::InvalidConfig(
                "max_rejection_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    // missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

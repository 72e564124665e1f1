//! Configuration for the calculator module.

use calculator_sdk::ValidRange;
use serde::Deserialize;
use thiserror::Error;

/// Module configuration.
///
/// The operand bounds are the only tunable. Both default to the
/// `[-1_000_000, 1_000_000]` interval.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Smallest accepted operand (inclusive).
    pub min_value: i32,

    /// Largest accepted operand (inclusive).
    pub max_value: i32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_value: ValidRange::MIN_VALUE,
            max_value: ValidRange::MAX_VALUE,
        }
    }
}

/// Errors produced while loading calculator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to parse calculator config: {0}")]
    Parse(String),

    #[error("invalid operand bounds: min_value {min} is greater than max_value {max}")]
    InvertedBounds { min: i32, max: i32 },
}

impl CalculatorConfig {
    /// Parses the configuration from a YAML document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed YAML, wrong types or
    /// unknown fields.
    pub fn from_yaml(src: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Converts the bounds into a [`ValidRange`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvertedBounds`] when `min_value > max_value`.
    pub fn valid_range(&self) -> Result<ValidRange, ConfigError> {
        ValidRange::new(self.min_value, self.max_value).ok_or(ConfigError::InvertedBounds {
            min: self.min_value,
            max: self.max_value,
        })
    }
}

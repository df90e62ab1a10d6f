//! Calculator configuration.
//!
//! Configuration is plain serde data so it can come from JSON or be
//! embedded in a checkpoint. Validation uses stillwater's `Validation` to
//! report every problem at once rather than stopping at the first.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Longest entry text shown verbatim on the display.
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 16;

/// Fractional mantissa digits used when the display shortens a number.
pub const DEFAULT_EXPONENT_DIGITS: usize = 6;

/// Transitions retained in a calculator's transition log.
pub const DEFAULT_TRANSITION_LOG_LIMIT: usize = 1024;

/// Upper bound accepted for `exponent_digits`.
pub const MAX_EXPONENT_DIGITS: usize = 20;

/// What happens after a chained operator produces a non-finite result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainErrorPolicy {
    /// The error counts as a finished result: the next digit or point
    /// starts a new number and backspace leaves the error alone.
    #[default]
    Reset,

    /// The error token stays editable: digits append to `"Error"` and
    /// backspace trims it, until `clear` is pressed.
    Append,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_display_len must be at least 1")]
    ZeroDisplayLength,

    #[error("exponent_digits must be at most {max}, got {found}")]
    TooManyExponentDigits { found: usize, max: usize },

    #[error("transition_log_limit must be at least 1")]
    ZeroTransitionLogLimit,

    #[error("invalid configuration JSON: {0}")]
    Parse(String),
}

/// Tunable calculator behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Entry text longer than this is shown in scientific notation.
    pub max_display_len: usize,

    /// Fractional digits of the scientific-notation mantissa.
    pub exponent_digits: usize,

    pub chain_error_policy: ChainErrorPolicy,

    /// Transitions kept in the transition log before the oldest are dropped.
    pub transition_log_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_display_len: DEFAULT_MAX_DISPLAY_LEN,
            exponent_digits: DEFAULT_EXPONENT_DIGITS,
            chain_error_policy: ChainErrorPolicy::default(),
            transition_log_limit: DEFAULT_TRANSITION_LOG_LIMIT,
        }
    }
}

impl CalculatorConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use tallyho::config::{CalculatorConfig, ChainErrorPolicy};
    ///
    /// let config = CalculatorConfig::from_json(r#"{"chain_error_policy": "append"}"#).unwrap();
    /// assert_eq!(config.chain_error_policy, ChainErrorPolicy::Append);
    /// assert_eq!(config.max_display_len, 16);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate every field, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if self.max_display_len == 0 {
            Validation::fail(ConfigError::ZeroDisplayLength)
        } else {
            Validation::success(())
        });

        checks.push(if self.exponent_digits > MAX_EXPONENT_DIGITS {
            Validation::fail(ConfigError::TooManyExponentDigits {
                found: self.exponent_digits,
                max: MAX_EXPONENT_DIGITS,
            })
        } else {
            Validation::success(())
        });

        checks.push(if self.transition_log_limit == 0 {
            Validation::fail(ConfigError::ZeroTransitionLogLimit)
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) flattened into a `Result`.
    pub fn check(&self) -> Result<(), Vec<ConfigError>> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}

//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::config::{CalculatorConfig, ChainErrorPolicy};
use crate::machine::{Calculator, Frame, Screen};

/// Builder for constructing calculators with a fluent API.
///
/// ```rust
/// use tallyho::builder::CalculatorBuilder;
/// use tallyho::config::ChainErrorPolicy;
/// use tallyho::machine::LoggingScreen;
///
/// let calc = CalculatorBuilder::new()
///     .max_display_len(12)
///     .chain_error_policy(ChainErrorPolicy::Append)
///     .screen(LoggingScreen)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.config().max_display_len, 12);
/// ```
pub struct CalculatorBuilder<S: Screen = Frame> {
    config: CalculatorConfig,
    screen: S,
}

impl CalculatorBuilder<Frame> {
    /// Create a builder with the default configuration and a [`Frame`].
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            screen: Frame::new(),
        }
    }
}

impl Default for CalculatorBuilder<Frame> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Screen> CalculatorBuilder<S> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_display_len(mut self, len: usize) -> Self {
        self.config.max_display_len = len;
        self
    }

    pub fn exponent_digits(mut self, digits: usize) -> Self {
        self.config.exponent_digits = digits;
        self
    }

    pub fn chain_error_policy(mut self, policy: ChainErrorPolicy) -> Self {
        self.config.chain_error_policy = policy;
        self
    }

    pub fn transition_log_limit(mut self, limit: usize) -> Self {
        self.config.transition_log_limit = limit;
        self
    }

    /// Render into a different screen.
    pub fn screen<T: Screen>(self, screen: T) -> CalculatorBuilder<T> {
        CalculatorBuilder {
            config: self.config,
            screen,
        }
    }

    /// Build the calculator.
    /// Returns an error listing every configuration violation.
    pub fn build(self) -> Result<Calculator<S>, BuildError> {
        self.config.check().map_err(BuildError::InvalidConfig)?;
        Ok(Calculator::from_parts(self.screen, self.config))
    }
}

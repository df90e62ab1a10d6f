//! Errors raised while assembling a calculator.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configuration failed validation. Carries every violation found.
    #[error("Invalid calculator configuration ({} violation(s)): {}", .0.len(), join(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

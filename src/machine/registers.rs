//! The calculator's state record.

use crate::core::number::ERROR_TEXT;
use crate::machine::operator::Operator;
use crate::machine::phase::Phase;
use serde::{Deserialize, Serialize};

/// The four registers every action reads and writes.
///
/// - `entry`: the number being typed, kept as text, or the error token.
///   Never empty.
/// - `previous`: the left operand waiting for the pending operator.
/// - `operator`: the pending operator; present exactly when `previous` is.
/// - `just_evaluated`: the entry is a finished result, so the next digit or
///   point starts a new number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registers {
    pub(crate) entry: String,
    pub(crate) previous: Option<String>,
    pub(crate) operator: Option<Operator>,
    pub(crate) just_evaluated: bool,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Registers as left by `clear`.
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            previous: None,
            operator: None,
            just_evaluated: false,
        }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    pub fn is_error(&self) -> bool {
        self.entry == ERROR_TEXT
    }

    /// Derive the conceptual phase from the registers.
    pub fn phase(&self) -> Phase {
        if self.is_error() {
            Phase::ErrorState
        } else if self.just_evaluated {
            Phase::Evaluated
        } else if self.operator.is_some() {
            if self.entry == "0" {
                Phase::OperatorPending
            } else {
                Phase::Chaining
            }
        } else {
            Phase::Entering
        }
    }

    /// In-progress equation text: `"<previous> <operator>"`, or empty when
    /// nothing is pending.
    pub fn pending_text(&self) -> String {
        match (&self.previous, self.operator) {
            (Some(previous), Some(op)) => format!("{previous} {op}"),
            _ => String::new(),
        }
    }

    /// Leave the evaluated state so typing starts a new number.
    pub(crate) fn start_fresh_if_evaluated(&mut self) {
        if self.just_evaluated {
            self.entry = "0".to_string();
            self.just_evaluated = false;
        }
    }

    /// Replace everything with the error token.
    pub(crate) fn fail(&mut self, just_evaluated: bool) {
        self.entry = ERROR_TEXT.to_string();
        self.previous = None;
        self.operator = None;
        self.just_evaluated = just_evaluated;
    }
}

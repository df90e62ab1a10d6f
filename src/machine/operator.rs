//! The four binary operators and their arithmetic.

use crate::machine::action::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Binary arithmetic operator.
///
/// Serialized as its symbol, so a pending `Multiply` appears as `"*"` in a
/// JSON checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

/// A binary result that is not a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("result of '{operator}' is not a finite number")]
    NonFinite { operator: Operator },
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator to `a` and `b`.
    ///
    /// Dividing by zero (either sign) fails with
    /// [`DomainError::DivisionByZero`]; any other infinite or NaN result
    /// fails with [`DomainError::NonFinite`].
    ///
    /// ```rust
    /// use tallyho::machine::{DomainError, Operator};
    ///
    /// assert_eq!(Operator::Subtract.apply(5.0, 8.0), Ok(-3.0));
    /// assert_eq!(Operator::Divide.apply(7.0, 0.0), Err(DomainError::DivisionByZero));
    /// assert!(Operator::Multiply.apply(1e200, 1e200).is_err());
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Result<f64, DomainError> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(DomainError::DivisionByZero);
                }
                a / b
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(DomainError::NonFinite { operator: self })
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(KeyError::NotAnOperator(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(KeyError::NotAnOperator(s.to_string())),
        }
    }
}

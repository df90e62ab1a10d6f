//! The abstract actions the calculator accepts, and the key bindings that
//! produce them.

use crate::machine::operator::Operator;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while translating input into actions.
///
/// These never come out of the calculator itself; they only surface when a
/// caller hands in a key or character that is not bound to anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),

    #[error("'{0}' is not an arithmetic operator")]
    NotAnOperator(String),

    #[error("key '{0}' is not bound to any calculator action")]
    Unrecognized(String),
}

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(KeyError::NotADigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a keypad, keyboard or script can ask the calculator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Digit(Digit),
    Dot,
    Operator(Operator),
    Equals,
    Percent,
    Backspace,
    Clear,
}

impl Action {
    /// Translate a keyboard key name into an action.
    ///
    /// Digits, `.`, the four operator symbols and `%` map to themselves.
    /// `Enter` and `=` evaluate, `Backspace` deletes, `Escape` clears.
    ///
    /// ```rust
    /// use tallyho::machine::{Action, Operator};
    ///
    /// assert_eq!(Action::from_key("Enter"), Ok(Action::Equals));
    /// assert_eq!(Action::from_key("*"), Ok(Action::Operator(Operator::Multiply)));
    /// assert!(Action::from_key("Tab").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self, KeyError> {
        match key {
            "." => Ok(Self::Dot),
            "+" | "-" | "*" | "/" => key.parse().map(Self::Operator),
            "Enter" | "=" => Ok(Self::Equals),
            "Backspace" => Ok(Self::Backspace),
            "Escape" => Ok(Self::Clear),
            "%" => Ok(Self::Percent),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Digit::try_from(c).map(Self::Digit),
                    _ => Err(KeyError::Unrecognized(key.to_string())),
                }
            }
        }
    }

    /// Short label used in logs and in the transition log.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => format!("digit {d}"),
            Self::Dot => "dot".to_string(),
            Self::Operator(op) => format!("operator {op}"),
            Self::Equals => "equals".to_string(),
            Self::Percent => "percent".to_string(),
            Self::Backspace => "backspace".to_string(),
            Self::Clear => "clear".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Action {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Action {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

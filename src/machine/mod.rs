//! The calculator and everything it exchanges with the outside world.
//!
//! # Key Concepts
//!
//! - **Registers**: the four-field state record (entry, previous operand,
//!   pending operator, just-evaluated flag)
//! - **Actions**: digit, dot, operator, equals, percent, backspace, clear
//! - **Screen**: the sink receiving display and history text
//! - **Phase**: a derived view of the registers used by guards and the
//!   transition log

mod action;
mod calculator;
mod operator;
mod phase;
mod registers;
mod screen;

pub use action::{Action, Digit, KeyError};
pub use calculator::Calculator;
pub use operator::{DomainError, Operator};
pub use phase::Phase;
pub use registers::Registers;
pub use screen::{Frame, LoggingScreen, NullScreen, Screen};

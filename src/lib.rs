//! Tallyho: a four-function calculator state machine
//!
//! Tallyho models the logic behind a pocket calculator: digits are typed
//! into a text entry, operators chain immediately (`5 + 3 +` already shows
//! `8`), percent is taken relative to the pending operand, and division by
//! zero or overflow lands in an `"Error"` state instead of failing the
//! caller. Input layers translate clicks or key presses into
//! [`Action`]s; output layers implement [`Screen`] to receive the display
//! and history texts.
//!
//! # Core Concepts
//!
//! - **Registers**: the entry text, the stored operand, the pending operator
//!   and the just-evaluated flag
//! - **Phase**: a derived view of the registers (`Entering`,
//!   `OperatorPending`, `Chaining`, `Evaluated`, `ErrorState`)
//! - **Guards**: pure predicates that turn actions into no-ops in phases
//!   where they do not apply
//! - **Transition log**: a bounded record of every action and the phase
//!   change it caused
//!
//! # Example
//!
//! ```rust
//! use tallyho::{Calculator, Operator};
//! use tallyho::machine::Digit;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(Digit::try_from('7').unwrap());
//! calc.choose_operator(Operator::Divide);
//! calc.input_digit(Digit::try_from('0').unwrap());
//! calc.equals();
//!
//! assert_eq!(calc.display_text(), "Error");
//!
//! calc.clear_all();
//! calc.press_keys(["2", "0", "0", "+", "1", "0", "%"]).unwrap();
//! assert_eq!(calc.entry(), "20");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, CalculatorBuilder};
pub use crate::checkpoint::{Checkpoint, CheckpointError};
pub use crate::config::{CalculatorConfig, ChainErrorPolicy, ConfigError};
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use crate::machine::{Action, Calculator, Digit, KeyError, Operator, Phase, Screen};

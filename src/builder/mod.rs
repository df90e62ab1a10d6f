//! Builder API for calculator construction.
//!
//! [`CalculatorBuilder`] assembles a validated configuration and a screen
//! into a [`Calculator`](crate::machine::Calculator). The [`state_enum!`]
//! macro declares phase enums with their `State` implementation.
//!
//! [`state_enum!`]: crate::state_enum

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::CalculatorBuilder;

//! Pure building blocks shared by the calculator.
//!
//! - The `State` trait that phase enums implement
//! - Guard predicates that admit or reject an action
//! - The bounded transition log
//! - Text/number conversions used for computing and rendering
//!
//! Nothing in here touches a screen or mutates a machine.

mod guard;
mod history;
pub mod number;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;

//! The `State` trait shared by every phase enum in the crate.
//!
//! A state is a plain value describing where a machine currently sits. It
//! carries no behavior beyond naming itself and reporting whether it is
//! terminal or an error condition.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// All methods are pure. States are small values that get copied into the
/// transition log, so they must be cloneable, comparable and serializable.
///
/// # Example
///
/// ```rust
/// use tallyho::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Keypad {
///     Idle,
///     Typing,
///     Jammed,
/// }
///
/// impl State for Keypad {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Typing => "Typing",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
///
/// assert_eq!(Keypad::Typing.name(), "Typing");
/// assert!(Keypad::Jammed.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and transition records.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Lamp {
        Off,
        On,
        Blown,
    }

    impl State for Lamp {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::On => "On",
                Self::Blown => "Blown",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Blown)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Blown)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Plain;

    impl State for Plain {
        fn name(&self) -> &str {
            "Plain"
        }
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(Lamp::Off.name(), "Off");
        assert_eq!(Lamp::On.name(), "On");
        assert_eq!(Lamp::Blown.name(), "Blown");
    }

    #[test]
    fn defaults_are_neither_final_nor_error() {
        assert!(!Plain.is_final());
        assert!(!Plain.is_error());
    }

    #[test]
    fn overrides_are_respected() {
        assert!(!Lamp::On.is_error());
        assert!(Lamp::Blown.is_error());
        assert!(Lamp::Blown.is_final());
    }

    #[test]
    fn state_survives_json() {
        let json = serde_json::to_string(&Lamp::On).unwrap();
        let back: Lamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Lamp::On);
    }
}

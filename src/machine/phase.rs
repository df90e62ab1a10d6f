//! Conceptual phases of the calculator.
//!
//! The machine stores four registers, not a phase. A phase is derived from
//! them on demand (see [`Registers::phase`](crate::machine::Registers::phase))
//! and exists for guards, logging and the transition log.

crate::state_enum! {
    /// Where the calculator sits between two actions.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        /// Typing the entry with no operator pending.
        Entering,
        /// An operator was just chosen; the entry is back at `0`.
        OperatorPending,
        /// An operator is pending and the right operand is being typed.
        Chaining,
        /// A result is on display; the next digit starts a new number.
        Evaluated,
        /// The entry holds the error token.
        ErrorState,
    }
    error: [ErrorState]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn only_error_state_is_an_error() {
        assert!(Phase::ErrorState.is_error());
        assert!(!Phase::Entering.is_error());
        assert!(!Phase::OperatorPending.is_error());
        assert!(!Phase::Chaining.is_error());
        assert!(!Phase::Evaluated.is_error());
    }

    #[test]
    fn no_phase_is_final() {
        for phase in [
            Phase::Entering,
            Phase::OperatorPending,
            Phase::Chaining,
            Phase::Evaluated,
            Phase::ErrorState,
        ] {
            assert!(!phase.is_final(), "{} should not be final", phase.name());
        }
    }

    #[test]
    fn names_follow_variants() {
        assert_eq!(Phase::OperatorPending.name(), "OperatorPending");
        assert_eq!(Phase::ErrorState.name(), "ErrorState");
    }
}

//! Property-based tests for the calculator.
//!
//! These tests use proptest to drive the calculator with random key
//! sequences and check the invariants that must hold after every action.

use proptest::prelude::*;
use tallyho::core::number::{format_display, number_to_text, parse_number};
use tallyho::core::State;
use tallyho::machine::{Action, Digit, Phase};
use tallyho::{Calculator, Operator};

prop_compose! {
    fn arbitrary_digit()(d in 0..10u8) -> Digit {
        Digit::new(d).unwrap()
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4usize) -> Operator {
        Operator::ALL[variant]
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(Action::Digit),
        1 => Just(Action::Dot),
        2 => arbitrary_operator().prop_map(Action::Operator),
        1 => Just(Action::Equals),
        1 => Just(Action::Percent),
        1 => Just(Action::Backspace),
        1 => Just(Action::Clear),
    ]
}

fn run(actions: &[Action]) -> Calculator {
    let mut calc = Calculator::new();
    for action in actions {
        calc.dispatch(*action);
    }
    calc
}

proptest! {
    #[test]
    fn entry_is_never_empty(actions in prop::collection::vec(arbitrary_action(), 0..60)) {
        let mut calc = Calculator::new();
        for action in actions {
            calc.dispatch(action);
            prop_assert!(!calc.entry().is_empty());
        }
    }

    #[test]
    fn backspace_floors_at_zero(
        digits in prop::collection::vec(arbitrary_digit(), 0..20),
        presses in 0..30usize,
    ) {
        let mut calc = Calculator::new();
        for digit in digits {
            calc.input_digit(digit);
        }
        for _ in 0..presses {
            calc.backspace();
            prop_assert!(!calc.entry().is_empty());
        }
        for _ in 0..20 {
            calc.backspace();
        }
        prop_assert_eq!(calc.entry(), "0");
    }

    #[test]
    fn entry_holds_at_most_one_point(actions in prop::collection::vec(arbitrary_action(), 0..60)) {
        let calc = run(&actions);
        prop_assert!(calc.entry().matches('.').count() <= 1);
    }

    #[test]
    fn clear_always_resets(actions in prop::collection::vec(arbitrary_action(), 0..60)) {
        let mut calc = run(&actions);
        calc.clear_all();
        prop_assert_eq!(calc.entry(), "0");
        prop_assert_eq!(calc.previous(), None);
        prop_assert_eq!(calc.operator(), None);
        prop_assert!(!calc.just_evaluated());
        prop_assert_eq!(calc.history_text(), "");
        prop_assert_eq!(calc.display_text(), "0");
    }

    #[test]
    fn operand_and_operator_are_set_together(
        actions in prop::collection::vec(arbitrary_action(), 0..60)
    ) {
        let mut calc = Calculator::new();
        for action in actions {
            calc.dispatch(action);
            prop_assert_eq!(calc.previous().is_some(), calc.operator().is_some());
        }
    }

    #[test]
    fn display_fits_default_width(actions in prop::collection::vec(arbitrary_action(), 0..80)) {
        let mut calc = Calculator::new();
        for action in actions {
            calc.dispatch(action);
            prop_assert!(calc.display_text().len() <= 16);
            prop_assert_eq!(calc.display_text(), calc.screen().display());
        }
    }

    #[test]
    fn error_phase_matches_error_token(actions in prop::collection::vec(arbitrary_action(), 0..60)) {
        let calc = run(&actions);
        prop_assert_eq!(calc.phase().is_error(), calc.entry() == "Error");
        prop_assert_eq!(calc.phase() == Phase::ErrorState, calc.entry() == "Error");
    }

    #[test]
    fn every_action_lands_in_the_log(actions in prop::collection::vec(arbitrary_action(), 0..60)) {
        let calc = run(&actions);
        // The startup clear is logged too.
        prop_assert_eq!(calc.transitions().len(), actions.len() + 1);
        let last = calc.transitions().transitions().last().map(|t| t.to);
        prop_assert_eq!(last, Some(calc.phase()));
    }

    #[test]
    fn equals_after_result_is_inert(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut calc = run(&actions);
        calc.equals();
        let entry = calc.entry().to_string();
        let history = calc.history_text().to_string();
        calc.equals();
        prop_assert_eq!(calc.entry(), entry.as_str());
        prop_assert_eq!(calc.history_text(), history.as_str());
    }

    #[test]
    fn canonical_text_round_trips(value in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let text = number_to_text(value);
        prop_assert_eq!(parse_number(&text), if value == 0.0 { 0.0 } else { value });
    }

    #[test]
    fn short_text_is_displayed_verbatim(text in "[0-9]{1,16}") {
        prop_assert_eq!(format_display(&text, 16, 6), text);
    }

    #[test]
    fn long_numbers_render_in_scientific_notation(text in "[1-9][0-9]{16,40}") {
        let shown = format_display(&text, 16, 6);
        prop_assert!(shown.contains("e+"));
        let mantissa = shown.split('e').next().unwrap();
        prop_assert_eq!(mantissa.split('.').nth(1).map(str::len), Some(6));
    }
}

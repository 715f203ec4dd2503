//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to drive the engine with arbitrary key
//! sequences and check that the session invariants always hold.

use keycalc::core::{render, Operator, Phase, Session, State};
use keycalc::engine::{apply, apply_clear, apply_decimal, Digit, Input};
use keycalc::validation::validate_session;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(value in 0..=9u8) -> Digit {
        Digit::try_from(value).unwrap()
    }
}

fn arbitrary_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(Input::Digit),
        1 => Just(Input::Decimal),
        2 => arbitrary_operator().prop_map(Input::Operator),
        1 => Just(Input::Equals),
        1 => Just(Input::Clear),
        1 => Just(Input::ToggleSign),
        1 => Just(Input::Percentage),
    ]
}

fn run(inputs: &[Input]) -> Session {
    inputs
        .iter()
        .fold(Session::new(), |session, input| apply(&session, *input))
}

proptest! {
    #[test]
    fn operator_implies_accumulator(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let mut session = Session::new();
        for input in inputs {
            session = apply(&session, input);
            if session.operator().is_some() {
                prop_assert!(session.accumulator().is_some());
            }
            prop_assert_ne!(session.phase(), Phase::Stored);
        }
    }

    #[test]
    fn display_is_never_empty(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let session = run(&inputs);
        prop_assert!(!session.display().is_empty());
    }

    #[test]
    fn reachable_sessions_are_valid(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let session = run(&inputs);
        prop_assert!(validate_session(&session).is_success());
    }

    #[test]
    fn clear_always_resets(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let session = apply_clear(&run(&inputs));
        let readout = render(&session);
        prop_assert_eq!(readout.display_text, "0");
        prop_assert_eq!(readout.pending_label, "");
        prop_assert_eq!(session, Session::new());
    }

    #[test]
    fn decimal_is_idempotent(inputs in prop::collection::vec(arbitrary_input(), 0..30)) {
        let once = apply_decimal(&run(&inputs));
        let twice = apply_decimal(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn transitions_are_pure(
        inputs in prop::collection::vec(arbitrary_input(), 0..30),
        next in arbitrary_input()
    ) {
        let session = run(&inputs);
        let snapshot = session.clone();
        let first = apply(&session, next);
        let second = apply(&session, next);
        prop_assert_eq!(&session, &snapshot);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sign_toggle_and_percentage_keep_pending_operation(
        inputs in prop::collection::vec(arbitrary_input(), 0..30),
        key in prop_oneof![Just(Input::ToggleSign), Just(Input::Percentage)]
    ) {
        let before = run(&inputs);
        let after = apply(&before, key);
        prop_assert_eq!(before.accumulator().map(f64::to_bits), after.accumulator().map(f64::to_bits));
        prop_assert_eq!(before.operator(), after.operator());
        prop_assert_eq!(before.waiting_for_new_value(), after.waiting_for_new_value());
    }

    #[test]
    fn typed_integers_display_verbatim(digits in prop::collection::vec(arbitrary_digit(), 1..12)) {
        let inputs: Vec<Input> = digits.iter().copied().map(Input::Digit).collect();
        let expected: String = digits.iter().map(|d| d.as_char()).collect();
        let expected = expected.trim_start_matches('0');
        let expected = if expected.is_empty() { "0" } else { expected };
        let session = run(&inputs);
        prop_assert_eq!(session.display(), expected);
    }

    #[test]
    fn sessions_are_never_final(inputs in prop::collection::vec(arbitrary_input(), 0..30)) {
        prop_assert!(!run(&inputs).is_final());
    }

    #[test]
    fn session_roundtrip_serialization(inputs in prop::collection::vec(arbitrary_input(), 0..30)) {
        let session = run(&inputs);
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(session, deserialized);
    }
}

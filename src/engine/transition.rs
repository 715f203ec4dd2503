//! Pure key-press transitions.
//!
//! Every function takes the current session by reference and returns the
//! next one. The input session is never modified.

use crate::builder::EngineConfig;
use crate::core::{format_number, Operator, Session, INITIAL_DISPLAY};

use super::input::{Digit, Input};

/// Enter a digit.
///
/// Starts a fresh number when the session is waiting for one, replaces a
/// lone `0`, and otherwise appends.
pub fn apply_digit(session: &Session, digit: Digit) -> Session {
    let mut next = session.clone();
    let ch = digit.as_char();
    if session.waiting_for_new_value {
        next.display = ch.to_string();
        next.waiting_for_new_value = false;
    } else if session.display == INITIAL_DISPLAY {
        next.display = ch.to_string();
    } else {
        next.display.push(ch);
    }
    next
}

/// Enter the decimal point. A second point in the same number is ignored.
pub fn apply_decimal(session: &Session) -> Session {
    let mut next = session.clone();
    if session.waiting_for_new_value {
        next.display = "0.".to_string();
        next.waiting_for_new_value = false;
    } else if !session.display.contains('.') {
        next.display.push('.');
    }
    next
}

/// Select an operator, folding any pending operation into the accumulator.
///
/// The pending operation is folded unless the display still shows the
/// accumulator untouched since the last operator press. Pressing operators
/// back to back just replaces the pending operator.
pub fn apply_operator(session: &Session, op: Operator) -> Session {
    let mut next = session.clone();
    let input_value = session.input_value();

    match (session.accumulator, session.operator) {
        (None, _) => next.accumulator = Some(input_value),
        (Some(acc), Some(_)) if shows_accumulator(session, acc) => {}
        (Some(acc), Some(pending)) => {
            let result = pending.combine(acc, input_value);
            next.display = format_number(result);
            next.accumulator = Some(result);
        }
        _ => {}
    }

    next.waiting_for_new_value = true;
    next.operator = Some(op);
    next
}

/// Complete the pending operation. No-op when nothing is pending.
pub fn apply_equals(session: &Session) -> Session {
    let (Some(acc), Some(op)) = (session.accumulator, session.operator) else {
        return session.clone();
    };

    let result = op.combine(acc, session.input_value());
    Session {
        display: format_number(result),
        accumulator: None,
        operator: None,
        waiting_for_new_value: true,
    }
}

/// Reset every field to the initial state.
pub fn apply_clear(_session: &Session) -> Session {
    Session::new()
}

/// Negate the display value, writing negative zero as `0`.
pub fn apply_toggle_sign(session: &Session) -> Session {
    toggle_sign(session, &EngineConfig::default())
}

/// Divide the display value by 100.
pub fn apply_percentage(session: &Session) -> Session {
    let mut next = session.clone();
    next.display = format_number(session.input_value() / 100.0);
    next
}

/// Apply one key press with the default configuration.
///
/// ```rust
/// use keycalc::core::Session;
/// use keycalc::engine::{apply, Input};
///
/// let session = Input::parse_sequence("7 / 0 =")
///     .unwrap()
///     .into_iter()
///     .fold(Session::new(), |s, key| apply(&s, key));
/// assert_eq!(session.display(), "Infinity");
/// ```
pub fn apply(session: &Session, input: Input) -> Session {
    apply_with(session, input, &EngineConfig::default())
}

/// Apply one key press under `config`.
pub fn apply_with(session: &Session, input: Input, config: &EngineConfig) -> Session {
    match input {
        Input::Digit(d) => apply_digit(session, d),
        Input::Decimal => apply_decimal(session),
        Input::Operator(op) => apply_operator(session, op),
        Input::Equals => apply_equals(session),
        Input::Clear => apply_clear(session),
        Input::ToggleSign => toggle_sign(session, config),
        Input::Percentage => apply_percentage(session),
    }
}

fn shows_accumulator(session: &Session, acc: f64) -> bool {
    session.waiting_for_new_value && session.display == format_number(acc)
}

fn toggle_sign(session: &Session, config: &EngineConfig) -> Session {
    let negated = -session.input_value();
    let mut next = session.clone();
    next.display = if negated == 0.0 && negated.is_sign_negative() && config.keep_negative_zero {
        "-0".to_string()
    } else {
        format_number(negated)
    };
    next
}

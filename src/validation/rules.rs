//! Session consistency rules using Validation.

use crate::core::{is_decimal_literal, parse_display, Session};
use crate::validation::violations::SessionViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for session check functions
pub type SessionCheck =
    Box<dyn Fn(&Session) -> Validation<(), NonEmptyVec<SessionViolation>> + Send + Sync>;

/// Set of checks run against a session.
/// Uses Validation to accumulate ALL violations.
pub struct SessionRules {
    checks: Vec<SessionCheck>,
}

impl SessionRules {
    /// Rules with no checks at all.
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// The invariants every engine-produced session satisfies.
    pub fn standard() -> Self {
        Self::empty()
            .require(check_display_present)
            .require(check_single_decimal_point)
            .require(check_display_numeric)
            .require(check_operator_has_accumulator)
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Session) -> Validation<(), NonEmptyVec<SessionViolation>> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Session) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.require(move |session: &Session| {
            if predicate(session) {
                Validation::success(())
            } else {
                Validation::fail(SessionViolation::CustomCheckFailed {
                    message: message.clone(),
                })
            }
        })
    }

    /// Run every check, accumulating ALL violations.
    pub fn enforce(&self, session: &Session) -> Validation<(), NonEmptyVec<SessionViolation>> {
        let results: Vec<_> = self.checks.iter().map(|check| check(session)).collect();
        Validation::all_vec(results).map(|_| ())
    }
}

impl Default for SessionRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Check a session against the standard rules.
///
/// ```rust
/// use keycalc::core::{Operator, Session};
/// use keycalc::validation::validate_session;
///
/// assert!(validate_session(&Session::new()).is_success());
///
/// let broken = Session::from_parts("", None, Some(Operator::Add), false);
/// assert!(validate_session(&broken).is_failure());
/// ```
pub fn validate_session(session: &Session) -> Validation<(), NonEmptyVec<SessionViolation>> {
    SessionRules::standard().enforce(session)
}

fn check_display_present(session: &Session) -> Validation<(), NonEmptyVec<SessionViolation>> {
    if session.display().is_empty() {
        Validation::fail(SessionViolation::EmptyDisplay)
    } else {
        Validation::success(())
    }
}

fn check_single_decimal_point(session: &Session) -> Validation<(), NonEmptyVec<SessionViolation>> {
    if session.display().matches('.').count() > 1 {
        Validation::fail(SessionViolation::MultipleDecimalPoints {
            display: session.display().to_string(),
        })
    } else {
        Validation::success(())
    }
}

// Special values and exponent literals may carry digits typed after them.
fn check_display_numeric(session: &Session) -> Validation<(), NonEmptyVec<SessionViolation>> {
    let display = session.display();
    if display.is_empty() || is_decimal_literal(display) {
        return Validation::success(());
    }

    let charset_ok = display
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-'));
    let has_reading = display.starts_with("NaN") || !parse_display(display).is_nan();

    if charset_ok && has_reading {
        Validation::success(())
    } else {
        Validation::fail(SessionViolation::MalformedDisplay {
            display: display.to_string(),
        })
    }
}

fn check_operator_has_accumulator(
    session: &Session,
) -> Validation<(), NonEmptyVec<SessionViolation>> {
    match (session.operator(), session.accumulator()) {
        (Some(op), None) => Validation::fail(SessionViolation::OperatorWithoutAccumulator {
            operator: op.symbol().to_string(),
        }),
        _ => Validation::success(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn initial_session_is_valid() {
        assert!(validate_session(&Session::new()).is_success());
    }

    #[test]
    fn engine_display_forms_are_valid() {
        for display in ["0.", "-12.5", "Infinity", "-Infinity", "NaN", "1e+21", "1.5e-7", "Infinity5"] {
            let session = Session::from_parts(display, None, None, true);
            assert!(
                validate_session(&session).is_success(),
                "{display} should be accepted"
            );
        }
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let session = Session::from_parts("", None, Some(Operator::Divide), false);

        match validate_session(&session) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SessionViolation::EmptyDisplay)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, SessionViolation::OperatorWithoutAccumulator { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn malformed_displays_are_rejected() {
        for display in ["abc", "1 2", "--", "."] {
            let session = Session::from_parts(display, None, None, false);
            let result = validate_session(&session);
            assert!(result.is_failure(), "{display} should be rejected");
        }
    }

    #[test]
    fn double_decimal_point_is_rejected() {
        let session = Session::from_parts("1.2.3", None, None, false);
        if let Validation::Failure(errors) = validate_session(&session) {
            assert!(errors
                .iter()
                .any(|e| matches!(e, SessionViolation::MultipleDecimalPoints { .. })));
        } else {
            panic!("Expected failure");
        }
    }

    #[test]
    fn stored_accumulator_without_operator_is_valid() {
        let session = Session::from_parts("3", Some(3.0), None, false);
        assert!(validate_session(&session).is_success());
    }

    #[test]
    fn custom_predicate_check_works() {
        let rules = SessionRules::standard()
            .require_pred(|s| s.display().len() <= 4, "display too long");

        assert!(rules.enforce(&Session::from_parts("1234", None, None, false)).is_success());

        let result = rules.enforce(&Session::from_parts("12345", None, None, false));
        if let Validation::Failure(errors) = result {
            assert_eq!(errors.len(), 1);
            assert!(errors.iter().any(|e| matches!(
                e,
                SessionViolation::CustomCheckFailed { message } if message == "display too long"
            )));
        } else {
            panic!("Expected failure");
        }
    }

    #[test]
    fn empty_rules_accept_anything() {
        let session = Session::from_parts("", None, Some(Operator::Add), true);
        assert!(SessionRules::empty().enforce(&session).is_success());
    }
}

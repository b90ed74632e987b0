//! Tests for constraint sets.

use validation_toolkit_core::{EvaluationResult, FnPredicate, Summary};
use validation_toolkit_test::{CountingPredicate, SignupForm, TestError};

use super::*;
use crate::constraint::{AnyConstraint, ConditionedConstraint, Constraint, SimpleConstraint};

fn is_even() -> impl Constraint<i32, TestError> {
    SimpleConstraint::from_fn(|x: &i32| x % 2 == 0, TestError::MustBeEven)
}

fn is_positive() -> impl Constraint<i32, TestError> {
    SimpleConstraint::from_fn(|x: &i32| *x > 0, TestError::MustBePositive)
}

fn even_and_positive() -> ConstraintSet<i32, TestError> {
    ConstraintSet::new()
        .with_constraint(is_even())
        .with_constraint(is_positive())
}

// Sets with mixed pass/fail patterns over small integers.
fn rule_lists() -> Vec<ConstraintSet<i32, TestError>> {
    vec![
        ConstraintSet::new(),
        even_and_positive(),
        ConstraintSet::new()
            .with_constraint(is_positive())
            .with_constraint(is_even())
            .with_constraint(SimpleConstraint::from_fn(
                |x: &i32| *x < 10,
                TestError::InvalidInput,
            )),
        ConstraintSet::new()
            .with_constraint(SimpleConstraint::from_fn(|_: &i32| false, TestError::Required))
            .with_constraint(is_even()),
    ]
}

#[test]
fn test_empty_constraint_set() {
    let set: ConstraintSet<i32, TestError> = ConstraintSet::new();

    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    for input in [-1, 0, 1] {
        assert!(set.evaluate_any(&input).is_valid());
        assert!(set.evaluate_all(&input).is_empty());
    }
}

#[test]
fn test_even_and_positive_on_negative_four() {
    let set = even_and_positive();

    assert_eq!(
        set.evaluate_any(&-4),
        EvaluationResult::Invalid(TestError::MustBePositive)
    );
    assert_eq!(
        set.evaluate_all(&-4),
        vec![
            EvaluationResult::Valid,
            EvaluationResult::Invalid(TestError::MustBePositive),
        ]
    );
}

#[test]
fn test_evaluate_any_matches_first_invalid_of_evaluate_all() {
    for set in rule_lists() {
        for input in -12..=12 {
            let expected = set
                .evaluate_all(&input)
                .into_iter()
                .find(EvaluationResult::is_invalid)
                .unwrap_or(EvaluationResult::Valid);
            assert_eq!(set.evaluate_any(&input), expected, "input {}", input);
        }
    }
}

#[test]
fn test_evaluate_all_length_and_order() {
    for set in rule_lists() {
        for input in -12..=12 {
            let results = set.evaluate_all(&input);
            assert_eq!(results.len(), set.len());
            for (result, constraint) in results.iter().zip(set.constraints()) {
                assert_eq!(result, &constraint.evaluate(&input));
            }
        }
    }
}

#[test]
fn test_evaluate_any_short_circuits() {
    let first = CountingPredicate::from_fn(|x: &i32| *x > 0);
    let second = CountingPredicate::from_fn(|x: &i32| x % 2 == 0);
    let first_calls = first.counter();
    let second_calls = second.counter();

    let mut set = ConstraintSet::new();
    set.add_predicate(first, TestError::MustBePositive);
    set.add_predicate(second, TestError::MustBeEven);

    assert!(set.evaluate_any(&-1).is_invalid());
    assert_eq!(first_calls.count(), 1);
    assert_eq!(second_calls.count(), 0);

    // Accumulate mode never short-circuits.
    assert_eq!(set.evaluate_all(&-1).len(), 2);
    assert_eq!(first_calls.count(), 2);
    assert_eq!(second_calls.count(), 1);
}

#[test]
fn test_empty_conditions_are_bypassed() {
    let set = even_and_positive();
    assert!(set.conditions().is_empty());
    assert_eq!(set.evaluate_all(&2), vec![EvaluationResult::Valid; 2]);
}

#[test]
fn test_failing_conditions_return_gate_results() {
    let main = CountingPredicate::from_fn(|x: &i32| *x < 100);
    let main_calls = main.counter();

    let mut set = ConstraintSet::new();
    set.add_predicate(main, TestError::InvalidInput);
    set.set_conditions(vec![is_positive().erase(), is_even().erase()]);

    let gate: ConstraintSet<i32, TestError> =
        ConstraintSet::from_constraints(vec![is_positive().erase(), is_even().erase()]);

    // Both conditions fail: the full gate list comes back.
    assert_eq!(set.evaluate_all(&-3), gate.evaluate_all(&-3));
    assert_eq!(
        set.evaluate_all(&-3),
        vec![
            EvaluationResult::Invalid(TestError::MustBePositive),
            EvaluationResult::Invalid(TestError::MustBeEven),
        ]
    );

    // One condition fails: the valid entries of the gate are kept as well.
    assert_eq!(
        set.evaluate_all(&3),
        vec![
            EvaluationResult::Valid,
            EvaluationResult::Invalid(TestError::MustBeEven),
        ]
    );
    assert_eq!(main_calls.count(), 0);

    // Gate passes: main results are returned.
    assert_eq!(
        set.evaluate_all(&200),
        vec![EvaluationResult::Invalid(TestError::InvalidInput)]
    );
    assert_eq!(main_calls.count(), 1);
}

#[test]
fn test_failing_conditions_fail_fast_in_any_mode() {
    let second_condition = CountingPredicate::from_fn(|x: &i32| x % 2 == 0);
    let second_calls = second_condition.counter();
    let main = CountingPredicate::from_fn(|_: &i32| true);
    let main_calls = main.counter();

    let mut set = ConstraintSet::new();
    set.add_predicate(main, TestError::InvalidInput);
    set.add_condition(is_positive());
    set.add_condition(SimpleConstraint::new(second_condition, TestError::MustBeEven));

    assert_eq!(
        set.evaluate_any(&-3),
        EvaluationResult::Invalid(TestError::MustBePositive)
    );
    assert_eq!(second_calls.count(), 0);
    assert_eq!(main_calls.count(), 0);

    assert!(set.evaluate_any(&4).is_valid());
    assert_eq!(main_calls.count(), 1);
}

#[test]
fn test_conditions_mut() {
    let mut set = even_and_positive();
    set.conditions_mut()
        .push(SimpleConstraint::from_fn(|x: &i32| *x != 0, TestError::Required).erase());
    assert_eq!(set.conditions().len(), 1);
    assert_eq!(set.evaluate_any(&0), EvaluationResult::Invalid(TestError::Required));

    set.conditions_mut().clear();
    assert_eq!(
        set.evaluate_any(&0),
        EvaluationResult::Invalid(TestError::MustBePositive)
    );
}

#[test]
fn test_from_iterator_and_extend() {
    let mut set: ConstraintSet<i32, TestError> =
        vec![is_even().erase()].into_iter().collect();
    set.extend([is_positive().erase()]);

    assert_eq!(set.len(), 2);
    assert_eq!(
        set.evaluate_all(&-1),
        vec![
            EvaluationResult::Invalid(TestError::MustBeEven),
            EvaluationResult::Invalid(TestError::MustBePositive),
        ]
    );
}

#[test]
fn test_nested_set_evaluates_fail_fast() {
    let inner = even_and_positive();
    let outer = ConstraintSet::new()
        .with_constraint(inner)
        .with_constraint(SimpleConstraint::from_fn(
            |x: &i32| *x < 10,
            TestError::InvalidInput,
        ));

    assert_eq!(
        outer.evaluate_all(&-3),
        vec![
            EvaluationResult::Invalid(TestError::MustBeEven),
            EvaluationResult::Valid,
        ]
    );
}

#[test]
fn test_summarize() {
    let set = even_and_positive();
    assert_eq!(
        set.summarize(&-3),
        Summary::from_errors(vec![TestError::MustBeEven, TestError::MustBePositive])
    );
    assert!(set.summarize(&8).is_valid());
}

#[test]
fn test_signup_form_rules() {
    let mut email = ConditionedConstraint::with_error_builder(
        FnPredicate::new(SignupForm::email_looks_valid),
        |form: &SignupForm| TestError::InvalidEmail(form.email.clone()),
    );
    email.append_condition(SimpleConstraint::from_fn(
        SignupForm::has_email,
        TestError::Required,
    ));

    let rules: Vec<AnyConstraint<SignupForm, TestError>> = vec![
        email.erase(),
        SimpleConstraint::from_fn(SignupForm::passwords_match, TestError::PasswordMismatch).erase(),
    ];
    let set = ConstraintSet::from_constraints(rules);

    assert!(set.evaluate_all(&SignupForm::valid()).iter().all(EvaluationResult::is_valid));

    let form = SignupForm::valid()
        .with_email("")
        .with_password_confirmation("typo");
    assert_eq!(
        set.evaluate_all(&form),
        vec![
            EvaluationResult::Invalid(TestError::Required),
            EvaluationResult::Invalid(TestError::PasswordMismatch),
        ]
    );
    assert_eq!(set.evaluate_any(&form), EvaluationResult::Invalid(TestError::Required));
}

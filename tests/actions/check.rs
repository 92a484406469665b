use super::apply;
use vali_rail::actions::{check, transform};
use vali_rail::{Action, Config, Dataset, Value};

fn positive(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n > 0.0)
}

#[test]
fn check_reports_with_input_label() {
    let dataset = apply(&check(positive), -2);

    assert!(dataset.is_typed());
    assert_eq!(dataset.issues()[0].issue_type(), "check");
    assert_eq!(dataset.issues()[0].message(), "Invalid input: Received -2");
}

#[test]
fn check_passes_and_skips() {
    assert!(apply(&check(positive), 2).is_success());

    let mut untyped = Dataset::untyped(Value::from(-2));
    check(positive).run(&mut untyped, &Config::default());
    assert!(!untyped.has_issues());
}

#[test]
fn transform_replaces_typed_values_only() {
    let double = transform(|v| Value::from(v.as_f64().unwrap_or_default() * 2.0));

    assert_eq!(apply(&double, 21).value(), &Value::from(42));

    let mut untyped = Dataset::untyped(Value::from(21));
    double.run(&mut untyped, &Config::default());
    assert_eq!(untyped.value(), &Value::from(21));
}

use vali_rail::schemas::{bigint, boolean, date, number, string, unknown, PrimitiveType};
use vali_rail::{run, Action, Config, Date, Function, IssueKind, Value};

#[test]
fn unknown_accepts_everything() {
    for input in [Value::Undefined, Value::from(Function::anonymous()), Value::from("x")] {
        assert!(run(&unknown(), input, &Config::default()).is_success());
    }
}

#[test]
fn primitive_schemas_accept_their_type() {
    assert!(run(&string(), "s", &Config::default()).is_success());
    assert!(run(&number(), 1.5, &Config::default()).is_success());
    assert!(run(&bigint(), Value::BigInt(1), &Config::default()).is_success());
    assert!(run(&boolean(), false, &Config::default()).is_success());
    assert!(run(&date(), Date::from_millis(0.0), &Config::default()).is_success());
}

#[test]
fn mismatch_reports_schema_issue_and_untypes() {
    let dataset = run(&number(), "1", &Config::default());

    assert!(!dataset.is_typed());
    let issue = &dataset.issues()[0];
    assert_eq!(issue.kind(), IssueKind::Schema);
    assert_eq!(issue.issue_type(), "number");
    assert_eq!(issue.expected(), Some("number"));
    assert_eq!(issue.message(), "Invalid type: Expected number but received \"1\"");
}

#[test]
fn nan_and_invalid_dates_are_rejected() {
    assert_eq!(run(&number(), f64::NAN, &Config::default()).issues().len(), 1);

    let dataset = run(&date(), Date::invalid(), &Config::default());
    assert_eq!(dataset.issues()[0].issue_type(), "date");
    assert_eq!(dataset.issues()[0].message(), "Invalid type: Expected Date but received Date");
}

#[test]
fn schema_message_can_be_replaced() {
    let dataset = run(&bigint().with_message("need a bigint"), 1, &Config::default());
    assert_eq!(dataset.issues()[0].message(), "need a bigint");
}

#[test]
fn primitive_type_metadata() {
    assert_eq!(boolean().primitive_type(), PrimitiveType::Boolean);
    assert_eq!(date().action_type(), "date");
    assert_eq!(date().expects(), Some("Date"));
    assert!(PrimitiveType::Bigint.accepts(&Value::BigInt(0)));
    assert!(!PrimitiveType::String.accepts(&Value::Null));
}

use vali_rail::actions::{cron, description, examples, isbn, title, to_number};
use vali_rail::schemas::{number, string, unknown};
use vali_rail::{
    get_description, get_examples, get_title, is, parse, pipe, safe_parse, Action, ActionKind,
    Config, Dataset, Validation, Value,
};

#[test]
fn safe_parse_returns_output_value() {
    let schema = pipe!(unknown(), to_number(), number());
    match safe_parse(&schema, "42", &Config::default()) {
        Validation::Valid(value) => assert_eq!(value, Value::from(42)),
        Validation::Invalid(issues) => panic!("unexpected issues: {issues:?}"),
    }
}

#[test]
fn safe_parse_fails_on_untyped_even_without_issues() {
    let mut dataset = vali_rail::Dataset::untyped(Value::Null);
    dataset.set_value(Value::from(1));
    assert!(Validation::from_dataset(dataset).is_invalid());
}

struct SilentlyUntyped;

impl Action for SilentlyUntyped {
    fn kind(&self) -> ActionKind {
        ActionKind::Transformation
    }

    fn action_type(&self) -> &'static str {
        "silently_untyped"
    }

    fn run(&self, dataset: &mut Dataset, _config: &Config) {
        dataset.mark_untyped();
    }
}

#[test]
fn untyped_run_without_issues_fails_with_empty_issue_list() {
    let schema = pipe!(string(), SilentlyUntyped);

    let result = safe_parse(&schema, "x", &Config::default());
    assert!(result.is_invalid());
    assert_eq!(result.iter_issues().count(), 0);

    let err = parse(&schema, "x", &Config::default()).unwrap_err();
    assert!(err.issues().is_empty());
    assert_eq!(err.to_string(), "validation failed");
    assert!(!is(&schema, "x"));
}

#[test]
fn parse_error_carries_every_issue() {
    let schema = pipe!(cron(), isbn());
    let err = parse(&schema, "x", &Config::default()).unwrap_err();

    assert_eq!(err.issues().len(), 2);
    assert_eq!(err.to_string(), "Invalid cron expression: Received \"x\"");

    let source: &dyn std::error::Error = &err;
    assert!(source.source().is_none());
}

#[test]
fn is_stops_at_first_issue() {
    let schema = pipe!(string(), isbn());
    assert!(is(&schema, "9780306406157"));
    assert!(!is(&schema, "9780306406150"));
    assert!(!is(&schema, 9780306406157_u64));
}

#[test]
fn metadata_readers_walk_nested_pipes() {
    let inner = pipe!(title("Inner"), examples(["b"]));
    let schema = pipe!(
        string(),
        title("Outer"),
        description("An ISBN"),
        examples(["a"]),
        inner,
        isbn(),
    );

    assert_eq!(get_title(&schema), Some("Inner"));
    assert_eq!(get_description(&schema), Some("An ISBN"));
    assert_eq!(get_examples(&schema), vec![Value::from("a"), Value::from("b")]);
}

#[test]
fn metadata_readers_on_plain_actions() {
    assert_eq!(get_title(&isbn()), None);
    assert!(get_examples(&isbn()).is_empty());
    assert_eq!(get_description(&description("just this")), Some("just this"));
}

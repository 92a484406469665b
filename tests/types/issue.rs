use vali_rail::{Issue, IssueKind, IssuePath, Issues, PathItem, PathKind, Requirement, Value};

#[test]
fn builder_defaults_label_to_type_and_received_to_input() {
    let issue = Issue::builder(IssueKind::Schema, "string", Value::from(5))
        .expected(Some("string"))
        .build();

    assert_eq!(issue.received(), "5");
    assert_eq!(issue.message(), "Invalid string: Expected string but received 5");
    assert_eq!(issue.to_string(), issue.message());
}

#[test]
fn requirement_can_be_reevaluated() {
    let even = Requirement::predicate(|v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
    assert!(even.is_satisfied_by(&Value::from(4)));
    assert!(!even.is_satisfied_by(&Value::from(3)));

    let exact = Requirement::Value(Value::from("yes"));
    assert!(exact.is_satisfied_by(&Value::from("yes")));
}

#[test]
fn dot_path_requires_string_or_number_keys() {
    let path = IssuePath::new(PathItem::object(Value::Null, "items", Value::Null))
        .push(PathItem::array(Value::Null, 0, Value::Null))
        .push(PathItem::object(Value::Null, "sku", Value::Null));
    assert_eq!(path.len(), 3);
    assert_eq!(path.dot_path().as_deref(), Some("items.0.sku"));

    let odd = IssuePath::new(PathItem::new(PathKind::Map, Value::Null, Value::from(true), Value::Null));
    assert_eq!(odd.dot_path(), None);
}

#[test]
fn empty_path_cannot_be_built() {
    assert!(IssuePath::from_items(Vec::new()).is_none());
    let path = IssuePath::from_items([PathItem::array(Value::Null, 1, Value::Null)]).unwrap();
    assert_eq!(path.first().key, Value::from(1));
}

#[test]
fn issues_keep_encounter_order() {
    let mut issues = Issues::new();
    for ty in ["a", "b", "c"] {
        issues.push(Issue::builder(IssueKind::Validation, ty, Value::Null).build());
    }
    issues.extend([Issue::builder(IssueKind::Validation, "d", Value::Null).build()]);

    let types: Vec<_> = issues.iter().map(Issue::issue_type).collect();
    assert_eq!(types, ["a", "b", "c", "d"]);
    assert_eq!(issues.first().map(Issue::issue_type), Some("a"));
    assert_eq!(issues.get(9).map(Issue::issue_type), None);
}

#[test]
fn issue_kind_names() {
    assert_eq!(IssueKind::Schema.to_string(), "schema");
    assert_eq!(IssueKind::Transformation.as_str(), "transformation");
}

use serde_json::json;
use vali_rail::actions::isbn;
use vali_rail::{flatten, run, Config, Date, IssueKind, Value};

#[test]
fn value_serializes_onto_json() {
    let value = Value::object([
        ("name", Value::from("vali")),
        ("tags", Value::array(["a", "b"])),
        ("missing", Value::Undefined),
        ("at", Value::from(Date::from_millis(0.0))),
    ]);

    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({
            "name": "vali",
            "tags": ["a", "b"],
            "missing": null,
            "at": "1970-01-01T00:00:00.000Z"
        })
    );
}

#[test]
fn value_deserializes_from_json() {
    let value: Value = serde_json::from_str(r#"{"n": 1.5, "list": [true, null]}"#).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.get("n"), Some(&Value::from(1.5)));
    assert_eq!(object.get("list"), Some(&Value::array([Value::from(true), Value::Null])));
}

#[test]
fn issue_serializes_rendered_message() {
    let dataset = run(&isbn(), Value::from("123"), &Config::default());
    let json = serde_json::to_value(&dataset.issues()[0]).unwrap();

    assert_eq!(
        json,
        json!({
            "kind": "validation",
            "type": "isbn",
            "input": "123",
            "expected": null,
            "received": "\"123\"",
            "message": "Invalid ISBN: Received \"123\"",
            "path": null
        })
    );
}

#[test]
fn issue_kind_round_trips_as_snake_case() {
    let kind: IssueKind = serde_json::from_str("\"transformation\"").unwrap();
    assert_eq!(kind, IssueKind::Transformation);
}

#[test]
fn flat_errors_serialize() {
    let dataset = run(&isbn(), Value::from("x"), &Config::default());
    let json = serde_json::to_value(flatten(dataset.issues())).unwrap();
    assert_eq!(json, json!({ "root": ["Invalid ISBN: Received \"x\""], "nested": {} }));
}

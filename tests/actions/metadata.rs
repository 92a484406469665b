use super::apply;
use vali_rail::actions::{description, examples, title, Metadata};
use vali_rail::{Action, ActionKind, Value};

#[test]
fn metadata_steps_do_nothing_when_run() {
    let dataset = apply(&title("Port"), "x");
    assert!(dataset.is_success());
    assert_eq!(dataset.value(), &Value::from("x"));
}

#[test]
fn metadata_steps_expose_their_payload() {
    let step = examples([1, 2]);
    assert_eq!(step.kind(), ActionKind::Metadata);
    assert_eq!(step.action_type(), "examples");
    assert_eq!(step.metadata(), Some(&Metadata::Examples(vec![Value::from(1), Value::from(2)])));

    assert_eq!(description("d").metadata(), Some(&Metadata::Description("d".into())));
    assert_eq!(title("t").action_type(), "title");
}

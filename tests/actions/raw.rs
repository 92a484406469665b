use super::apply;
use vali_rail::actions::{raw_check, raw_transform, RawIssueInfo};
use vali_rail::{Action, Config, Dataset, IssueKind, IssuePath, PathItem, Value};

#[test]
fn raw_check_can_report_several_issues() {
    let fields = raw_check(|ctx| {
        let Some(object) = ctx.value().as_object().cloned() else {
            return;
        };
        for (key, value) in object.iter() {
            if value.is_null() {
                let path = IssuePath::new(PathItem::object(ctx.value().clone(), key, value.clone()));
                ctx.add_issue(
                    RawIssueInfo::default()
                        .with_label("field")
                        .with_input(value.clone())
                        .with_path(path),
                );
            }
        }
    });

    let input = Value::object([("a", Value::Null), ("b", Value::from(1)), ("c", Value::Null)]);
    let dataset = apply(&fields, input);

    assert!(dataset.is_typed());
    let paths: Vec<_> = dataset.issues().iter().filter_map(|i| i.dot_path()).collect();
    assert_eq!(paths, ["a", "c"]);
    assert_eq!(dataset.issues()[0].kind(), IssueKind::Validation);
    assert_eq!(dataset.issues()[0].issue_type(), "raw_check");
    assert_eq!(dataset.issues()[0].message(), "Invalid field: Received null");
}

#[test]
fn raw_check_sees_config() {
    let lang_check = raw_check(|ctx| {
        if ctx.config().lang() != Some("en") {
            ctx.add_issue(RawIssueInfo::default().with_message("english only"));
        }
    });

    let mut dataset = Dataset::new(Value::Null);
    lang_check.run(&mut dataset, &Config::default().with_lang("de"));
    assert_eq!(dataset.issues()[0].message(), "english only");
    assert_eq!(dataset.issues()[0].lang(), Some("de"));
}

#[test]
fn raw_check_skips_untyped() {
    let always = raw_check(|ctx| ctx.add_issue(RawIssueInfo::default()));
    let mut dataset = Dataset::untyped(Value::Null);
    always.run(&mut dataset, &Config::default());
    assert!(!dataset.has_issues());
}

#[test]
fn raw_transform_replaces_value_on_success() {
    let trim = raw_transform(|ctx| Value::from(ctx.value().as_str().unwrap_or_default().trim()));
    let dataset = apply(&trim, "  x ");

    assert!(dataset.is_success());
    assert_eq!(dataset.value(), &Value::from("x"));
}

#[test]
fn raw_transform_keeps_value_after_an_issue() {
    let parse_flag = raw_transform(|ctx| match ctx.value().as_str() {
        Some("yes") => Value::from(true),
        Some("no") => Value::from(false),
        _ => {
            ctx.add_issue(RawIssueInfo::default().with_expected("\"yes\" or \"no\"").with_label("flag"));
            Value::Undefined
        }
    });

    assert_eq!(apply(&parse_flag, "yes").value(), &Value::from(true));

    let dataset = apply(&parse_flag, "maybe");
    assert_eq!(dataset.value(), &Value::from("maybe"));
    assert!(!dataset.is_typed());
    let issue = &dataset.issues()[0];
    assert_eq!(issue.kind(), IssueKind::Transformation);
    assert_eq!(issue.issue_type(), "raw_transform");
    assert_eq!(issue.message(), "Invalid flag: Expected \"yes\" or \"no\" but received \"maybe\"");
}

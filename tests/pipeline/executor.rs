use vali_rail::actions::{check, cron, isbn, title, to_number, to_string};
use vali_rail::pipeline::run_items;
use vali_rail::schemas::{number, string};
use vali_rail::{pipe, run, BoxedAction, Config, Dataset, IntoAction, Pipe, Value};

fn failing(name: &'static str) -> BoxedAction {
    check(|_: &Value| false).with_message(name).into_action()
}

fn messages(dataset: &Dataset) -> Vec<&str> {
    dataset.issues().iter().map(|issue| issue.message()).collect()
}

#[test]
fn empty_sequence_is_identity() {
    let mut dataset = Dataset::new(Value::from("same"));
    run_items::<BoxedAction>(&[], &mut dataset, &Config::fail_fast());

    assert_eq!(dataset.value(), &Value::from("same"));
    assert!(dataset.is_success());
    assert!(run(&Pipe::new(), Value::Null, &Config::default()).is_success());
}

#[test]
fn without_flags_every_issue_is_kept_in_order() {
    let items = vec![failing("first"), failing("second"), failing("third")];
    let mut dataset = Dataset::new(Value::Null);
    run_items(&items, &mut dataset, &Config::default());

    assert_eq!(messages(&dataset), ["first", "second", "third"]);
}

#[test]
fn abort_early_stops_after_first_issue() {
    let items = vec![failing("first"), failing("second")];
    let mut dataset = Dataset::new(Value::Null);
    run_items(&items, &mut dataset, &Config::fail_fast());

    assert_eq!(messages(&dataset), ["first"]);
}

#[test]
fn abort_pipe_early_applies_the_same_local_stop() {
    let items = vec![failing("first"), failing("second")];
    let mut dataset = Dataset::new(Value::Null);
    run_items(&items, &mut dataset, &Config::default().with_abort_pipe_early(true));

    assert_eq!(messages(&dataset), ["first"]);
}

#[test]
fn later_transformations_do_not_run_after_abort() {
    let schema = pipe!(string(), to_number());
    let dataset = run(&schema, 12, &Config::fail_fast());

    assert_eq!(dataset.value(), &Value::from(12));
    assert_eq!(dataset.issues().len(), 1);
}

#[test]
fn transformations_still_run_after_a_failed_schema() {
    let schema = pipe!(number(), to_string(), cron());
    let dataset = run(&schema, "5", &Config::default());

    assert_eq!(dataset.value(), &Value::from("5"));
    assert_eq!(dataset.issues().len(), 1);
    assert_eq!(dataset.issues()[0].issue_type(), "number");
}

#[test]
fn metadata_never_counts_as_a_step() {
    let schema = pipe!(title("Book"), isbn(), title("ignored"));
    let dataset = run(&schema, "0306406152", &Config::fail_fast());
    assert!(dataset.is_success());
}

#[test]
fn an_arriving_failed_dataset_is_not_processed_under_abort() {
    let mut dataset = Dataset::new(Value::from("x"));
    run_items(&[failing("earlier")], &mut dataset, &Config::default());

    run_items(&[failing("later")], &mut dataset, &Config::fail_fast());
    assert_eq!(messages(&dataset), ["earlier"]);
}

#[test]
fn config_is_threaded_to_every_step() {
    let schema = pipe!(cron(), isbn());
    let config = Config::default().with_message("overridden").with_lang("nl");
    let dataset = run(&schema, "x", &config);

    assert_eq!(messages(&dataset), ["overridden", "overridden"]);
    assert!(dataset.issues().iter().all(|issue| issue.lang() == Some("nl")));
}
